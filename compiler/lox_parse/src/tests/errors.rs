//! Syntax error tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::parse_source;
use crate::{IllegalTokenReason, ParseErrorKind};
use lox_diagnostic::ErrorCode;
use lox_ir::{Position, TokenKind};
use pretty_assertions::assert_eq;

fn first_error(source: &str) -> crate::ParseError {
    parse_source(source)
        .error
        .unwrap_or_else(|| panic!("expected a parse error for {source:?}"))
}

#[test]
fn test_missing_semicolon() {
    let error = first_error("print 1 2;");
    assert_eq!(
        error.kind,
        ParseErrorKind::ExpectedToken {
            expected: TokenKind::Semicolon,
            context: "after value",
            found: "`2`".into(),
        }
    );
    assert_eq!(error.code(), ErrorCode::E1001);
    assert_eq!(error.token.position, Position::new(8, 1, 9));
}

#[test]
fn test_missing_semicolon_at_end_of_input() {
    let error = first_error("var x = 1");
    assert_eq!(
        error.kind,
        ParseErrorKind::UnexpectedEof {
            expected: "`;` after variable declaration".into(),
        }
    );
    assert_eq!(error.code(), ErrorCode::E1005);
}

#[test]
fn test_unclosed_grouping() {
    let error = first_error("(1 + 2;");
    assert_eq!(error.code(), ErrorCode::E1003);
    assert_eq!(
        error.to_diagnostic().to_string(),
        "error[E1003]: expected `)` after expression, found `;` at 1:7"
    );
}

#[test]
fn test_expected_expression() {
    let error = first_error("print ;");
    assert_eq!(
        error.kind,
        ParseErrorKind::ExpectedExpression {
            found: "`;`".into()
        }
    );
    assert_eq!(error.code(), ErrorCode::E1002);

    assert_eq!(first_error("1 +").code(), ErrorCode::E1005);
}

#[test]
fn test_expected_identifier() {
    let error = first_error("var 1 = 2;");
    assert_eq!(
        error.kind,
        ParseErrorKind::ExpectedIdentifier {
            found: "`1`".into()
        }
    );
    assert_eq!(error.code(), ErrorCode::E1004);
}

#[test]
fn test_assignment_is_not_parsed() {
    let error = first_error("var x; x = 2;");
    assert_eq!(
        error.kind,
        ParseErrorKind::ExpectedToken {
            expected: TokenKind::Semicolon,
            context: "after expression",
            found: "`=`".into(),
        }
    );
}

#[test]
fn test_illegal_tokens() {
    let cases = [
        ("print \"abc", IllegalTokenReason::UnterminatedString, "\"abc"),
        ("print 1.2.3;", IllegalTokenReason::MalformedNumber, "1.2.3"),
        ("print @;", IllegalTokenReason::UnexpectedCharacter, "@"),
        ("print 1 # 2;", IllegalTokenReason::UnexpectedCharacter, "#"),
    ];
    for (source, reason, lexeme) in cases {
        let error = first_error(source);
        assert_eq!(
            error.kind,
            ParseErrorKind::IllegalToken {
                lexeme: lexeme.into(),
                reason,
            },
            "{source}"
        );
        assert_eq!(error.code(), reason.code());
    }
}

#[test]
fn test_statements_before_error_are_kept() {
    let output = parse_source("var a = 1; print a; print );  print 2;");
    assert!(output.has_errors());
    assert_eq!(output.statements.len(), 2);
    assert!(output.into_result().is_err());
}
