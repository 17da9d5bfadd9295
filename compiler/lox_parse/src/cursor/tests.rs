use super::*;
use pretty_assertions::assert_eq;

fn tokens(kinds: &[TokenKind]) -> Vec<Token> {
    kinds.iter().map(|&k| Token::dummy(k)).collect()
}

#[test]
fn advance_walks_the_stream() {
    let stream = tokens(&[TokenKind::Print, TokenKind::Nil, TokenKind::Eof]);
    let mut cursor = Cursor::new(&stream);

    assert!(cursor.check(TokenKind::Print));
    assert_eq!(cursor.advance().kind, TokenKind::Print);
    assert_eq!(cursor.current_kind(), TokenKind::Nil);
    assert_eq!(cursor.position(), 1);
    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn advance_stops_at_eof() {
    let stream = tokens(&[TokenKind::Eof]);
    let mut cursor = Cursor::new(&stream);

    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn missing_eof_is_synthesized() {
    let mut stream = tokens(&[TokenKind::Nil]);
    stream[0].position = Position::new(4, 2, 3);
    let mut cursor = Cursor::new(&stream);

    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current().position, Position::new(4, 2, 3));

    let empty: Vec<Token> = Vec::new();
    assert!(Cursor::new(&empty).is_at_end());
}

#[test]
fn match_any_does_not_consume() {
    let stream = tokens(&[TokenKind::Minus, TokenKind::Eof]);
    let cursor = Cursor::new(&stream);

    assert!(cursor.match_any(&[TokenKind::Plus, TokenKind::Minus]));
    assert!(!cursor.match_any(&[TokenKind::Star, TokenKind::Slash]));
    assert_eq!(cursor.position(), 0);
}
