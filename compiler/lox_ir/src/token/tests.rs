use super::*;
use pretty_assertions::assert_eq;

#[test]
fn lookup_resolves_every_keyword_spelling() {
    for kind in TokenKind::KEYWORDS {
        assert_eq!(lookup(kind.display_name()), kind, "keyword {kind}");
        assert!(kind.is_keyword());
    }
}

#[test]
fn lookup_is_exact_match() {
    assert_eq!(lookup("while"), TokenKind::While);
    assert_eq!(lookup("whilex"), TokenKind::Identifier);
    assert_eq!(lookup("While"), TokenKind::Identifier);
    assert_eq!(lookup("va"), TokenKind::Identifier);
    assert_eq!(lookup(""), TokenKind::Identifier);
    assert_eq!(lookup("returns"), TokenKind::Identifier);
}

#[test]
fn non_keywords_are_not_keywords() {
    for kind in [
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Eof,
        TokenKind::BangEqual,
    ] {
        assert!(!kind.is_keyword(), "{kind:?}");
    }
}

#[test]
fn describe_prefers_payload() {
    let ident = Token::with_literal(
        TokenKind::Identifier,
        Literal::Str("count".into()),
        Position::START,
    );
    assert_eq!(ident.describe(), "`count`");

    let string = Token::with_literal(TokenKind::String, Literal::Str("hi".into()), Position::START);
    assert_eq!(string.describe(), "`\"hi\"`");

    assert_eq!(Token::dummy(TokenKind::Semicolon).describe(), "`;`");
    assert_eq!(Token::dummy(TokenKind::Eof).describe(), "end of input");
}

#[test]
fn literal_accessors() {
    assert_eq!(Literal::Str("x".into()).as_str(), Some("x"));
    assert_eq!(Literal::Str("x".into()).as_number(), None);
    assert_eq!(Literal::Number(2.5).as_number(), Some(2.5));
    assert_eq!(Literal::Number(2.5).as_str(), None);
}
