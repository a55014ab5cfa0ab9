use toon_codec::decode::scanner::{fold_newlines, scan, Cursor};

#[test]
fn depth_tagging_and_blank_collection() {
    let (lines, blanks) = scan("a: 1\n  b: 2\n\n    c: 3", 2, true).unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!((lines[0].depth, lines[0].content), (0, "a: 1"));
    assert_eq!((lines[1].depth, lines[1].content), (1, "b: 2"));
    assert_eq!((lines[2].depth, lines[2].content), (2, "c: 3"));
    assert_eq!(lines[2].line_no, 4);
    assert_eq!(lines[2].indent, 4);
    assert_eq!(blanks.len(), 1);
    assert_eq!(blanks[0].line_no, 3);
}

#[test]
fn whitespace_only_input_scans_to_nothing() {
    let (lines, blanks) = scan("", 2, true).unwrap();
    assert!(lines.is_empty() && blanks.is_empty());
    let (lines, blanks) = scan("  \n\t\n", 2, true).unwrap();
    assert!(lines.is_empty() && blanks.is_empty());
}

#[test]
fn strict_rejects_tab_indentation() {
    let err = scan("a:\n\tb: 1", 2, true).unwrap_err();
    assert!(err.to_string().contains("tabs not allowed"));
    assert_eq!(err.line(), Some(2));
}

#[test]
fn lenient_tab_starts_the_content() {
    let (lines, _) = scan("a:\n\tb: 1", 2, false).unwrap();
    assert_eq!(lines[1].depth, 0);
    assert!(lines[1].content.starts_with('\t'));
}

#[test]
fn strict_rejects_ragged_indent() {
    let err = scan("a:\n   b: 1", 2, true).unwrap_err();
    assert!(err.to_string().contains("exact multiple"));
    assert_eq!(err.line(), Some(2));
}

#[test]
fn lenient_floors_ragged_indent() {
    let (lines, _) = scan("a:\n   b: 1", 2, false).unwrap();
    assert_eq!(lines[1].depth, 1);
    assert_eq!(lines[1].indent, 3);
}

#[test]
fn custom_indent_widths() {
    let (lines, _) = scan("a:\n    b: 1", 4, true).unwrap();
    assert_eq!(lines[1].depth, 1);
    let (lines, _) = scan("a:\n b: 1", 1, true).unwrap();
    assert_eq!(lines[1].depth, 1);
    // Width zero behaves as one.
    let (lines, _) = scan("a:\n b: 1", 0, true).unwrap();
    assert_eq!(lines[1].depth, 1);
}

#[test]
fn interior_tabs_are_content_not_indent() {
    let (lines, _) = scan("a: x\ty", 2, true).unwrap();
    assert_eq!(lines[0].content, "a: x\ty");
}

#[test]
fn newline_folding() {
    assert_eq!(fold_newlines("a\r\nb\rc"), "a\nb\nc");
    assert!(matches!(
        fold_newlines("plain"),
        std::borrow::Cow::Borrowed(_)
    ));
}

#[test]
fn cursor_walks_forward_only() {
    let (lines, blanks) = scan("a: 1\nb: 2", 2, true).unwrap();
    let mut cursor = Cursor::new(lines, blanks);
    assert_eq!(cursor.len(), 2);
    assert!(!cursor.is_empty());
    assert!(cursor.current().is_none());

    let first = cursor.take().unwrap();
    assert_eq!(first.content, "a: 1");
    assert_eq!(cursor.current().unwrap().content, "a: 1");
    assert_eq!(cursor.peek().unwrap().content, "b: 2");

    cursor.advance();
    assert!(cursor.at_end());
    assert!(cursor.take().is_none());
    assert_eq!(cursor.current().unwrap().content, "b: 2");
}
