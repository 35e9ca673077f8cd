//! Column descriptors: where a cell's content comes from and how it is laid
//! out.

use std::sync::Arc;

use termbuf::{Span, TextAlign};

use crate::record::Record;

/// Pure function producing a styled cell for a row.
pub type CellFormatter<T> = Arc<dyn Fn(&T) -> Span + Send + Sync>;

/// One entry of a per-row action set, hosted by an [`CellSource::Actions`]
/// column. The table reports invocations by `id`; what an action does is
/// entirely the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub id: &'static str,
    pub label: &'static str,
}

impl RowAction {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// What a column displays. Columns backed by a field key are sortable;
/// computed and action columns are not.
#[derive(Clone)]
pub enum CellSource<T> {
    /// Read the field and display its string form.
    Field(String),
    /// Sort by the field, display through a formatter.
    Formatted {
        key: String,
        format: CellFormatter<T>,
    },
    /// Display-only synthetic column.
    Computed(CellFormatter<T>),
    /// Per-row action set.
    Actions(Vec<RowAction>),
}

/// Column configuration: header text, fixed width in terminal columns,
/// alignment, and the cell source.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::field("name", "Vendor Name", 24),
///     Column::field("products", "Products", 10).align(TextAlign::Right),
///     Column::formatted("status", "Status", 10, |v: &Vendor| v.status.badge()),
///     Column::actions(10, vec![RowAction::new("view", "view")]),
/// ];
/// ```
#[derive(Clone)]
pub struct Column<T> {
    pub header: String,
    pub width: u16,
    pub align: TextAlign,
    pub source: CellSource<T>,
}

impl<T: Record> Column<T> {
    pub fn field(key: impl Into<String>, header: impl Into<String>, width: u16) -> Self {
        Self {
            header: header.into(),
            width,
            align: TextAlign::Left,
            source: CellSource::Field(key.into()),
        }
    }

    pub fn formatted(
        key: impl Into<String>,
        header: impl Into<String>,
        width: u16,
        format: impl Fn(&T) -> Span + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            width,
            align: TextAlign::Left,
            source: CellSource::Formatted {
                key: key.into(),
                format: Arc::new(format),
            },
        }
    }

    pub fn computed(
        header: impl Into<String>,
        width: u16,
        format: impl Fn(&T) -> Span + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            width,
            align: TextAlign::Left,
            source: CellSource::Computed(Arc::new(format)),
        }
    }

    pub fn actions(width: u16, actions: Vec<RowAction>) -> Self {
        Self {
            header: String::new(),
            width,
            align: TextAlign::Right,
            source: CellSource::Actions(actions),
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// The field key this column sorts by, if any.
    pub fn sort_key(&self) -> Option<&str> {
        match &self.source {
            CellSource::Field(key) => Some(key),
            CellSource::Formatted { key, .. } => Some(key),
            CellSource::Computed(_) | CellSource::Actions(_) => None,
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_key().is_some()
    }

    /// The cell content for a row. A missing field renders empty.
    pub fn cell(&self, row: &T) -> Span {
        match &self.source {
            CellSource::Field(key) => match row.field(key) {
                Some(value) => Span::raw(value.to_string()),
                None => Span::default(),
            },
            CellSource::Formatted { format, .. } | CellSource::Computed(format) => format(row),
            // Action cells are laid out by the renderer, which needs
            // per-action hit rectangles.
            CellSource::Actions(_) => Span::default(),
        }
    }
}
