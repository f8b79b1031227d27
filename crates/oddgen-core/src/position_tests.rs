use crate::{LineIndex, Position};

#[test]
fn first_character() {
    let index = LineIndex::new("abc");
    assert_eq!(index.position(0), Position::START);
}

#[test]
fn positions_across_lines() {
    let index = LineIndex::new("ab\ncd\n\nef");

    assert_eq!(index.position(1), Position::new(1, 2));
    assert_eq!(index.position(2), Position::new(1, 3)); // the newline itself
    assert_eq!(index.position(3), Position::new(2, 1));
    assert_eq!(index.position(6), Position::new(3, 1));
    assert_eq!(index.position(8), Position::new(4, 2));
    assert_eq!(index.line_count(), 4);
}

#[test]
fn columns_count_characters() {
    let index = LineIndex::new("λx = 1");
    // 'λ' is two bytes
    assert_eq!(index.position(2), Position::new(1, 2));
}

#[test]
fn clamps_past_end() {
    let index = LineIndex::new("ab");
    assert_eq!(index.position(99), Position::new(1, 3));
}

#[test]
fn display() {
    assert_eq!(Position::new(3, 7).to_string(), "line 3, column 7");
}
