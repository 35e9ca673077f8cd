//! The stateful table widget.

use log::debug;
use termbuf::{Event, Key, Modifiers, MouseButton, Rect};

use crate::column::{CellSource, Column, RowAction};
use crate::record::Record;
use crate::search::SearchInput;
use crate::state::ViewState;
use crate::{filter, page, sort};

const DEFAULT_PAGE_SIZE: usize = 8;

/// What the widget tells its caller. The table hosts action cells but has
/// no idea what the actions mean.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<T> {
    Action { id: &'static str, row: T },
}

/// The visible subset derived from the full row set: filtered, then
/// sorted, then paginated — always in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    /// Filtered and sorted indices into the full row set.
    pub order: Vec<usize>,
    /// The (clamped) current page.
    pub page: usize,
    pub total_pages: usize,
    /// The window of `order` shown on the current page.
    pub visible: Vec<usize>,
}

impl DerivedView {
    pub fn filtered(&self) -> usize {
        self.order.len()
    }
}

/// Hit-test geometry recorded by the renderer so mouse events can be
/// routed without a retained scene graph.
#[derive(Debug, Clone, Default)]
pub(crate) struct Geometry {
    pub(crate) area: Rect,
    pub(crate) search: Rect,
    pub(crate) header_cells: Vec<(Rect, usize)>,
    pub(crate) rows: Vec<(Rect, usize)>,
    pub(crate) actions: Vec<(Rect, usize, RowAction)>,
    pub(crate) prev: Rect,
    pub(crate) next: Rect,
}

/// A searchable, sortable, paginated table over an in-memory row set.
///
/// The widget owns all interactive state (search text, sort key and
/// direction, current page, cursor row) and recomputes the derived view
/// from the full row set on every state change. Instances are fully
/// independent; nothing is shared.
pub struct DataTable<T: Record> {
    pub(crate) columns: Vec<Column<T>>,
    pub(crate) rows: Vec<T>,
    pub(crate) state: ViewState,
    pub(crate) page_size: usize,
    pub(crate) search_key: Option<String>,
    pub(crate) placeholder: String,
    pub(crate) search: SearchInput,
    /// Cursor offset within the current page, if any row is focused.
    pub(crate) cursor: Option<usize>,
    pub(crate) layout: Geometry,
}

impl<T: Record> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        Self {
            columns,
            rows,
            state: ViewState::new(),
            page_size: DEFAULT_PAGE_SIZE,
            search_key: None,
            placeholder: String::new(),
            search: SearchInput::new(),
            cursor: None,
            layout: Geometry::default(),
        }
    }

    /// Enable the search box, filtering on `key`.
    pub fn searchable(mut self, key: impl Into<String>, placeholder: impl Into<String>) -> Self {
        self.search_key = Some(key.into());
        self.placeholder = placeholder.into();
        self
    }

    /// Rows shown per page; constant for the life of the instance.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replace the row set, keeping query and sort. The page and cursor
    /// are re-clamped against the new rows on the next derivation.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.cursor = None;
    }

    /// Drop rows not matching the predicate (e.g. a delete action).
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.rows.retain(keep);
        self.cursor = None;
    }

    /// Programmatically cycle the sort on a column key — the same
    /// unsorted → ascending → descending → unsorted cycle a header click
    /// runs through.
    pub fn toggle_sort(&mut self, key: &str) {
        self.state.toggle_sort(key);
        self.cursor = None;
    }

    /// Recompute the derived view: filter → sort → paginate. The stored
    /// page is clamped against the current filtered set before slicing,
    /// so a stale page silently lands on the last valid page.
    pub fn derive(&mut self) -> DerivedView {
        let order = match &self.search_key {
            Some(key) => filter::apply(&self.rows, key, self.state.query()),
            None => (0..self.rows.len()).collect(),
        };
        let order = match self.state.sort() {
            Some((key, direction)) => sort::apply(&self.rows, order, key, direction),
            None => order,
        };

        let total_pages = page::count(order.len(), self.page_size);
        self.state.clamp_page(total_pages);

        let visible = page::slice(&order, self.state.page(), self.page_size).to_vec();
        DerivedView {
            order,
            page: self.state.page(),
            total_pages,
            visible,
        }
    }

    /// Feed one input event through the widget. Returns an event when a
    /// row action was invoked.
    pub fn handle_event(&mut self, event: &Event) -> Option<TableEvent<T>> {
        match *event {
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(x, y),
            Event::Scroll { x, y, delta } => {
                if self.layout.area.contains(x, y) {
                    self.flip_page(delta as i64);
                }
                None
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Option<TableEvent<T>> {
        match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt && c != '\0' => {
                if self.search_key.is_some() {
                    self.search.insert(c);
                    self.apply_search();
                }
                None
            }
            Key::Backspace if self.search_key.is_some() => {
                if self.search.backspace() {
                    self.apply_search();
                }
                None
            }
            Key::Delete if self.search_key.is_some() => {
                if self.search.delete() {
                    self.apply_search();
                }
                None
            }
            Key::Left => {
                self.search.move_left();
                None
            }
            Key::Right => {
                self.search.move_right();
                None
            }
            Key::Home => {
                self.search.move_to_start();
                None
            }
            Key::End => {
                self.search.move_to_end();
                None
            }
            Key::Up => {
                self.move_cursor(-1);
                None
            }
            Key::Down => {
                self.move_cursor(1);
                None
            }
            Key::PageUp => {
                self.flip_page(-1);
                None
            }
            Key::PageDown => {
                self.flip_page(1);
                None
            }
            Key::Enter => self.invoke_first_action(),
            _ => None,
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) -> Option<TableEvent<T>> {
        // Action cells sit inside row rects, so they are checked first.
        if let Some((row_offset, action)) = self
            .layout
            .actions
            .iter()
            .find(|(rect, _, _)| rect.contains(x, y))
            .map(|(_, offset, action)| (*offset, *action))
        {
            self.cursor = Some(row_offset);
            let row = self.row_at(row_offset)?;
            debug!("table action '{}' invoked by click", action.id);
            return Some(TableEvent::Action { id: action.id, row });
        }

        if let Some(column_index) = self
            .layout
            .header_cells
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, index)| *index)
        {
            if let Some(key) = self.columns[column_index].sort_key().map(str::to_string) {
                debug!("toggling sort on '{key}'");
                self.state.toggle_sort(&key);
                self.cursor = None;
            }
            return None;
        }

        if self.layout.prev.contains(x, y) {
            self.flip_page(-1);
            return None;
        }
        if self.layout.next.contains(x, y) {
            self.flip_page(1);
            return None;
        }

        if let Some(row_offset) = self
            .layout
            .rows
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, offset)| *offset)
        {
            self.cursor = Some(row_offset);
        }
        None
    }

    fn apply_search(&mut self) {
        self.state.set_search(self.search.text());
        self.cursor = None;
    }

    fn move_cursor(&mut self, delta: i64) {
        let visible_len = self.derive().visible.len();
        if visible_len == 0 {
            self.cursor = None;
            return;
        }
        let next = match self.cursor {
            Some(current) => (current as i64 + delta).clamp(0, visible_len as i64 - 1) as usize,
            None => 0,
        };
        self.cursor = Some(next);
    }

    fn flip_page(&mut self, delta: i64) {
        let view = self.derive();
        let target = (view.page as i64 + delta).max(1) as usize;
        self.state.set_page(target, view.total_pages);
        self.cursor = None;
    }

    fn row_at(&mut self, page_offset: usize) -> Option<T> {
        let view = self.derive();
        view.visible
            .get(page_offset)
            .map(|&index| self.rows[index].clone())
    }

    fn invoke_first_action(&mut self) -> Option<TableEvent<T>> {
        let cursor = self.cursor?;
        let action = self.first_action()?;
        let row = self.row_at(cursor)?;
        debug!("table action '{}' invoked via Enter", action.id);
        Some(TableEvent::Action { id: action.id, row })
    }

    fn first_action(&self) -> Option<RowAction> {
        self.columns.iter().find_map(|column| match &column.source {
            CellSource::Actions(actions) => actions.first().copied(),
            _ => None,
        })
    }
}
