use super::*;
use crate::models::BufferSnapshot;

fn word(text: &str, anchor: usize) -> TextSpan {
    select_word(&BufferSnapshot::from_text(text), anchor)
}

#[test]
fn test_word_around_anchor() {
    let text = "let hello_world = foo;";
    assert_eq!(word(text, 7), TextSpan::new(4, 11));
    assert_eq!(word(text, 4), TextSpan::new(4, 11));
    assert_eq!(word(text, 15), TextSpan::new(4, 11));
    assert_eq!(word(text, 21), TextSpan::new(18, 3));
}

#[test]
fn test_word_at_buffer_edges() {
    assert_eq!(word("alpha", 0), TextSpan::new(0, 5));
    assert_eq!(word("alpha", 5), TextSpan::new(0, 5));
    assert_eq!(word("", 0), TextSpan::empty(0));
}

#[test]
fn test_no_word_gives_caret() {
    assert_eq!(word("a + b", 2), TextSpan::empty(2));
    assert_eq!(word("(  )", 2), TextSpan::empty(2));
}

#[test]
fn test_unicode_identifier() {
    assert_eq!(word("x = 变量名 + 1", 5), TextSpan::new(4, 3));
    assert_eq!(word("café()", 2), TextSpan::new(0, 4));
}

#[test]
fn test_dollar_sigil_is_not_absorbed() {
    // `"$name"`: the `$` is preceded by a quote, so it stays outside.
    assert_eq!(word("\"$name\"", 4), TextSpan::new(2, 4));
    // `$` at the very start of the buffer behaves the same way.
    assert_eq!(word("$name", 3), TextSpan::new(1, 4));
}

#[test]
fn test_dollar_inside_identifier_is_kept() {
    assert_eq!(word("a$b = 1", 2), TextSpan::new(0, 3));
    assert_eq!(word("jq$ + 1", 1), TextSpan::new(0, 3));
}

#[test]
fn test_out_of_range_anchor_is_soft() {
    assert_eq!(word("abc", 10), TextSpan::empty(10));
}

#[test]
fn test_word_selection_is_idempotent() {
    let text = BufferSnapshot::from_text("fn main() { let foo = 42; }");
    let first = select_word(&text, 17);
    let second = select_word(&text, 17);
    assert_eq!(first, second);
    assert_eq!(first, TextSpan::new(16, 3));
}
