use termbuf::{Buffer, Cell, Rect, Rgb, Style};

#[test]
fn test_set_text_plain() {
    let mut buf = Buffer::new(20, 3);
    let written = buf.set_text(2, 1, "hello", 10, Style::new());

    assert_eq!(written, 5);
    assert_eq!(buf.row_text(1), "  hello");
}

#[test]
fn test_set_text_clips_to_max_width() {
    let mut buf = Buffer::new(20, 1);
    let written = buf.set_text(0, 0, "hello world", 5, Style::new());

    assert_eq!(written, 5);
    assert_eq!(buf.row_text(0), "hello");
}

#[test]
fn test_set_text_clips_at_buffer_edge() {
    let mut buf = Buffer::new(6, 1);
    buf.set_text(4, 0, "abc", 10, Style::new());

    assert_eq!(buf.row_text(0), "    ab");
}

#[test]
fn test_set_text_wide_glyph_continuation() {
    let mut buf = Buffer::new(10, 1);
    let written = buf.set_text(0, 0, "日x", 10, Style::new());

    assert_eq!(written, 3);
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().char, 'x');
}

#[test]
fn test_set_text_wide_glyph_does_not_straddle_clip() {
    // One column left, a 2-wide glyph must not be written
    let mut buf = Buffer::new(10, 1);
    let written = buf.set_text(0, 0, "日", 1, Style::new());
    assert_eq!(written, 0);
}

#[test]
fn test_style_patching_keeps_existing_background() {
    let mut buf = Buffer::new(10, 1);
    let bg = Rgb::new(40, 40, 60);
    buf.fill(Rect::new(0, 0, 10, 1), Style::new().bg(bg));
    buf.set_text(0, 0, "hi", 10, Style::new().fg(Rgb::new(255, 0, 0)));

    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.bg, bg, "text drawn without bg keeps the fill color");
    assert_eq!(cell.fg, Rgb::new(255, 0, 0));
}

#[test]
fn test_diff_reports_changed_cells_only() {
    let a = Buffer::new(4, 1);
    let mut b = Buffer::new(4, 1);
    b.set(2, 0, Cell {
        char: 'x',
        ..Cell::default()
    });

    let changes: Vec<_> = b.diff(&a).collect();
    assert_eq!(changes.len(), 1);
    assert_eq!((changes[0].0, changes[0].1), (2, 0));
    assert_eq!(changes[0].2.char, 'x');
}

#[test]
fn test_clear_resets_cells() {
    let mut buf = Buffer::new(4, 1);
    buf.set_text(0, 0, "abcd", 4, Style::new());
    buf.clear();
    assert_eq!(buf.row_text(0), "");
}
