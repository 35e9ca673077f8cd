//! The filter → sort → paginate pipeline, exercised through the engines
//! and through `DataTable::derive`.

use tabular::{filter, page, sort, Column, DataTable, Direction, Record, Value};
use termbuf::{Event, Key, Modifiers};

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

fn key(c: char) -> Event {
    Event::Key {
        key: Key::Char(c),
        modifiers: Modifiers::new(),
    }
}

fn press(k: Key) -> Event {
    Event::Key {
        key: k,
        modifiers: Modifiers::new(),
    }
}

#[test]
fn test_pipeline_filter_sort_paginate_in_order() {
    let rows = vec![
        Item::new("Beta", 2),
        Item::new("Alpha", 2),
        Item::new("Gamma", 1),
    ];

    // All three names contain "a" case-insensitively.
    let order = filter::apply(&rows, "name", "a");
    assert_eq!(order, vec![0, 1, 2]);

    // Sorting by score descending keeps Beta before Alpha (tie, input
    // order) and Gamma last.
    let order = sort::apply(&rows, order, "score", Direction::Desc);
    assert_eq!(order, vec![0, 1, 2]);

    assert_eq!(page::slice(&order, 1, 2), &[0, 1]);
    assert_eq!(page::slice(&order, 2, 2), &[2]);
}

#[test]
fn test_derive_runs_the_same_pipeline() {
    let rows = vec![
        Item::new("Beta", 2),
        Item::new("Alpha", 2),
        Item::new("Gamma", 1),
    ];
    let mut table = DataTable::new(
        vec![
            Column::field("name", "Name", 12),
            Column::field("score", "Score", 8),
        ],
        rows,
    )
    .searchable("name", "Search…")
    .page_size(2);

    table.handle_event(&key('a'));
    table.toggle_sort("score");
    table.toggle_sort("score");

    let view = table.derive();
    assert_eq!(view.order, vec![0, 1, 2]);
    assert_eq!(view.visible, vec![0, 1]);
    assert_eq!(view.total_pages, 2);
}

#[test]
fn test_search_narrowing_resets_stale_page() {
    // 25 rows, page size 5: five pages. Park on page 3, then type a
    // query that narrows the result to a single page.
    let mut rows: Vec<Item> = (1..=25)
        .map(|n| Item::new(&format!("item-{n:02}"), n))
        .collect();
    rows.push(Item::new("special", 99));

    let mut table = DataTable::new(
        vec![
            Column::field("name", "Name", 12),
            Column::field("score", "Score", 8),
        ],
        rows,
    )
    .searchable("name", "Search…")
    .page_size(5);

    table.handle_event(&press(Key::PageDown));
    table.handle_event(&press(Key::PageDown));
    assert_eq!(table.derive().page, 3);

    for c in "spec".chars() {
        table.handle_event(&key(c));
    }

    let view = table.derive();
    assert_eq!(view.page, 1, "narrowed search must land on page 1");
    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.total_pages, 1);
}

#[test]
fn test_clearing_the_search_restores_identity_order() {
    let rows = vec![
        Item::new("Beta", 2),
        Item::new("Alpha", 2),
        Item::new("Gamma", 1),
    ];
    let mut table = DataTable::new(vec![Column::field("name", "Name", 12)], rows)
        .searchable("name", "Search…");

    table.handle_event(&key('g'));
    assert_eq!(table.derive().order, vec![2]);

    table.handle_event(&press(Key::Backspace));
    assert_eq!(table.derive().order, vec![0, 1, 2]);
    assert_eq!(table.derive().page, 1);
}

#[test]
fn test_page_out_of_range_is_silently_clamped() {
    let rows: Vec<Item> = (0..7).map(|n| Item::new(&format!("r{n}"), n)).collect();
    let mut table =
        DataTable::new(vec![Column::field("name", "Name", 12)], rows).page_size(3);

    table.handle_event(&press(Key::PageDown));
    table.handle_event(&press(Key::PageDown));
    table.handle_event(&press(Key::PageDown));
    table.handle_event(&press(Key::PageDown));

    let view = table.derive();
    assert_eq!(view.page, 3, "paging past the end sticks to the last page");
    assert_eq!(view.visible, vec![6]);
}

#[test]
fn test_empty_rows_derive_to_page_one() {
    let mut table = DataTable::new(
        vec![Column::field("name", "Name", 12)],
        Vec::<Item>::new(),
    );
    let view = table.derive();
    assert_eq!(view.page, 1);
    assert!(view.visible.is_empty());
    assert_eq!(view.total_pages, 0);
}
