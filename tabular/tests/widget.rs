//! Rendering and mouse routing for the table widget.

use tabular::{Column, DataTable, Direction, Record, RowAction, TableEvent, TableStyle, Value};
use termbuf::{Buffer, Event, Key, Modifiers, MouseButton, Rect};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    name: String,
    score: i64,
}

impl Item {
    fn new(name: &str, score: i64) -> Self {
        Self {
            name: name.to_string(),
            score,
        }
    }
}

impl Record for Item {
    fn field(&self, key: &str) -> Option<Value> {
        match key {
            "name" => Some(Value::text(&self.name)),
            "score" => Some(Value::Int(self.score)),
            _ => None,
        }
    }
}

fn click(x: u16, y: u16) -> Event {
    Event::Click {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn press(key: Key) -> Event {
    Event::Key {
        key,
        modifiers: Modifiers::new(),
    }
}

/// Columns: name [0..20), score [20..30), actions [30..46).
fn table() -> DataTable<Item> {
    DataTable::new(
        vec![
            Column::field("name", "Name", 20),
            Column::field("score", "Score", 10),
            Column::actions(
                16,
                vec![RowAction::new("view", "view"), RowAction::new("delete", "delete")],
            ),
        ],
        vec![
            Item::new("Beta", 2),
            Item::new("Alpha", 2),
            Item::new("Gamma", 1),
        ],
    )
    .searchable("name", "Search items…")
    .page_size(2)
}

fn render(table: &mut DataTable<Item>, buf: &mut Buffer) {
    buf.clear();
    let area = Rect::from_size(buf.width(), buf.height());
    table.render(buf, area, &TableStyle::default());
}

// With a search line the layout is: search y0, gap y1, header y2,
// body y3..y5, gap y5, pager y6.

#[test]
fn test_renders_header_rows_and_pager() {
    let mut table = table();
    let mut buf = Buffer::new(80, 20);
    render(&mut table, &mut buf);

    assert!(buf.row_text(0).contains("Search items…"));
    assert!(buf.row_text(2).contains("Name"));
    assert!(buf.row_text(2).contains("Score"));
    assert!(buf.row_text(3).contains("Beta"));
    assert!(buf.row_text(3).contains("view"));
    assert!(buf.row_text(4).contains("Alpha"));
    assert!(buf.row_text(6).contains("3 rows"));
    assert!(buf.row_text(6).contains("Page 1 of 2"));
}

#[test]
fn test_header_click_cycles_sort() {
    let mut table = table();
    let mut buf = Buffer::new(80, 20);

    render(&mut table, &mut buf);
    table.handle_event(&click(22, 2));
    assert_eq!(table.state().sort(), Some(("score", Direction::Asc)));
    assert_eq!(table.derive().order, vec![2, 0, 1]);

    render(&mut table, &mut buf);
    table.handle_event(&click(22, 2));
    assert_eq!(table.state().sort(), Some(("score", Direction::Desc)));
    assert_eq!(table.derive().order, vec![0, 1, 2]);

    render(&mut table, &mut buf);
    table.handle_event(&click(22, 2));
    assert_eq!(table.state().sort(), None);
}

#[test]
fn test_sort_indicator_in_header() {
    let mut table = table();
    let mut buf = Buffer::new(80, 20);
    render(&mut table, &mut buf);
    table.handle_event(&click(22, 2));

    render(&mut table, &mut buf);
    assert!(buf.row_text(2).contains("Score ▲"));

    table.handle_event(&click(22, 2));
    render(&mut table, &mut buf);
    assert!(buf.row_text(2).contains("Score ▼"));
}

#[test]
fn test_action_cell_click_reports_the_row() {
    let mut table = table();
    let mut buf = Buffer::new(80, 20);
    render(&mut table, &mut buf);

    // "view" is drawn at the left edge of the actions column on the
    // first body row.
    let event = table.handle_event(&click(31, 3));
    assert_eq!(
        event,
        Some(TableEvent::Action {
            id: "view",
            row: Item::new("Beta", 2),
        })
    );

    // "delete" follows two cells after "view".
    render(&mut table, &mut buf);
    let event = table.handle_event(&click(37, 4));
    assert_eq!(
        event,
        Some(TableEvent::Action {
            id: "delete",
            row: Item::new("Alpha", 2),
        })
    );
}

#[test]
fn test_pager_next_click_flips_page() {
    let mut table = table();
    let mut buf = Buffer::new(80, 20);
    render(&mut table, &mut buf);

    // Pager controls are right-aligned on row 6: "‹ Prev" at x53,
    // "Next ›" at x74.
    table.handle_event(&click(74, 6));
    let view = table.derive();
    assert_eq!(view.page, 2);
    assert_eq!(view.visible, vec![2]);

    render(&mut table, &mut buf);
    assert!(buf.row_text(4).is_empty() || !buf.row_text(4).contains("Alpha"));
    assert!(buf.row_text(3).contains("Gamma"));

    table.handle_event(&click(53, 6));
    assert_eq!(table.derive().page, 1);
}

#[test]
fn test_cursor_and_enter_invoke_first_action() {
    let mut table = table();
    let mut buf = Buffer::new(80, 20);
    render(&mut table, &mut buf);

    table.handle_event(&press(Key::Down));
    table.handle_event(&press(Key::Down));
    let event = table.handle_event(&press(Key::Enter));
    assert_eq!(
        event,
        Some(TableEvent::Action {
            id: "view",
            row: Item::new("Alpha", 2),
        })
    );
}

#[test]
fn test_typing_filters_and_shows_no_results() {
    let mut table = table();
    let mut buf = Buffer::new(80, 20);

    for c in "zzz".chars() {
        table.handle_event(&press(Key::Char(c)));
    }
    render(&mut table, &mut buf);

    assert!(buf.row_text(0).contains("zzz"));
    let body: String = (3..5).map(|y| buf.row_text(y)).collect::<Vec<_>>().join("\n");
    assert!(body.contains("No results") || buf.row_text(4).contains("No results"));
    assert!(buf.row_text(6).contains("0 of 3 rows"));
}

#[test]
fn test_missing_field_column_renders_empty_cells() {
    let mut table = DataTable::new(
        vec![
            Column::field("name", "Name", 20),
            Column::field("nope", "Missing", 12),
        ],
        vec![Item::new("Beta", 2)],
    );
    let mut buf = Buffer::new(60, 10);
    render(&mut table, &mut buf);

    // Header row 0 (no search line), body row 1.
    assert!(buf.row_text(0).contains("Missing"));
    assert_eq!(buf.row_text(1), "Beta");
}

#[test]
fn test_delete_via_retain_shrinks_the_table() {
    let mut table = table();
    table.retain(|item| item.name != "Alpha");
    let view = table.derive();
    assert_eq!(view.order.len(), 2);
    assert_eq!(view.total_pages, 1);
}
