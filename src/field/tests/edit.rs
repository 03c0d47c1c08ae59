use crate::field::TextEdit;

#[test]
fn apply_inserts_replaces_and_deletes_by_char_index() {
    assert_eq!(TextEdit::insert(0, "H").apply_to(""), "H");
    assert_eq!(TextEdit::insert(2, "y").apply_to("hello"), "heyllo");
    assert_eq!(TextEdit::new(1..4, "ipp").apply_to("hello"), "hippo");
    assert_eq!(TextEdit::delete(4..5).apply_to("hello"), "hell");
}

#[test]
fn apply_counts_chars_not_bytes() {
    let text = "îmbunătăți";
    assert_eq!(TextEdit::delete(0..1).apply_to(text), "mbunătăți");
    assert_eq!(TextEdit::insert(5, "-").apply_to(text), "îmbun-ătăți");
}

#[test]
fn apply_clamps_out_of_range_edits() {
    assert_eq!(TextEdit::insert(99, "!").apply_to("hi"), "hi!");
    assert_eq!(TextEdit::delete(1..99).apply_to("hi"), "h");
    assert_eq!(TextEdit::new(3..1, "x").apply_to("abcd"), "abcxd");
}
