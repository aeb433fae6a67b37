use super::*;

#[test]
fn advance_tracks_rows_and_columns() {
    let mut cursor = Cursor::new("ab\ncd\nef");
    cursor.advance(1);
    assert_eq!(cursor.location(), Location::new(1, 2));
    cursor.advance(2);
    assert_eq!(cursor.location(), Location::new(2, 1));
    cursor.advance(4);
    assert_eq!(cursor.location(), Location::new(3, 2));
    assert_eq!(cursor.rest(), "f");
}

#[test]
fn columns_count_characters_not_bytes() {
    let mut cursor = Cursor::new("éé!");
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.location(), Location::new(1, 3));
}

#[test]
fn eat_until_newline_stops_before_it() {
    let mut cursor = Cursor::new("// note\nx");
    cursor.eat_until_newline();
    assert_eq!(cursor.current(), Some(b'\n'));
    assert_eq!(cursor.location(), Location::new(1, 8));
}

#[test]
fn eat_past_finds_closing_delimiter() {
    let mut cursor = Cursor::new("a\n b */rest");
    assert!(cursor.eat_past("*/"));
    assert_eq!(cursor.rest(), "rest");
    assert_eq!(cursor.location(), Location::new(2, 6));

    let mut open = Cursor::new("never closed");
    assert!(!open.eat_past("*/"));
    assert!(open.is_eof());
}

#[test]
fn string_body_honours_escapes() {
    let mut cursor = Cursor::new(r#"a \" b" tail"#);
    assert!(cursor.eat_string_body());
    assert_eq!(cursor.rest(), " tail");

    let mut trailing_backslash = Cursor::new("abc\\");
    assert!(!trailing_backslash.eat_string_body());
    assert!(trailing_backslash.is_eof());
}

#[test]
fn eat_while_stops_at_non_ascii() {
    let mut cursor = Cursor::new("abcé");
    cursor.eat_while(|b| b.is_ascii_alphanumeric());
    assert_eq!(cursor.slice_from(0), "abc");
}
