use termbuf::text::{align_offset, char_width, display_width, truncate_to_width};
use termbuf::TextAlign;

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a b c"), 5);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are typically 2 cells wide
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("한글"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 3), "he…");
}

#[test]
fn test_truncate_edge_cases() {
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
    assert_eq!(truncate_to_width("", 5), "");
}

#[test]
fn test_truncate_cjk() {
    // "日本語" is 6 cells wide; with max_width=5 only "日本" (4 cells)
    // fits next to the ellipsis.
    assert_eq!(truncate_to_width("日本語", 5), "日本…");
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(4, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
    assert_eq!(align_offset(4, 10, TextAlign::Right), 6);
    // No room to align
    assert_eq!(align_offset(10, 4, TextAlign::Right), 0);
}
