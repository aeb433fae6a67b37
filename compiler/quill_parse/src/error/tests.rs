use super::*;
use pretty_assertions::assert_eq;

fn token(kind: TokenKind, lexeme: &str) -> Token<'_> {
    Token::new(kind, lexeme, Span::new(3, 3 + lexeme.len() as u32), Location::new(1, 4))
}

#[test]
fn unexpected_token_message() {
    let err = ParseError::at(
        ParseErrorKind::UnexpectedToken {
            expected: ";".into(),
            found: "}".into(),
        },
        &token(TokenKind::Punct, "}"),
    );
    assert_eq!(err.to_string(), "1:4: expected ';' but got '}'");
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn invalid_token_reports_the_lex_error() {
    let err = ParseError::at(
        ParseErrorKind::ExpectedExpression { found: "@".into() },
        &token(TokenKind::Invalid(LexError::UnexpectedChar), "@"),
    );
    assert_eq!(err.kind, ParseErrorKind::Lex(LexError::UnexpectedChar));
    assert_eq!(err.code(), ErrorCode::E0002);
}

#[test]
fn every_kind_maps_to_its_code() {
    let cases = [
        (ParseErrorKind::Lex(LexError::UnterminatedString), ErrorCode::E0001),
        (ParseErrorKind::Lex(LexError::IntegerTooLarge), ErrorCode::E0003),
        (ParseErrorKind::Lex(LexError::UnterminatedComment), ErrorCode::E0004),
        (
            ParseErrorKind::ExpectedExpression { found: ")".into() },
            ErrorCode::E1002,
        ),
        (ParseErrorKind::UnterminatedBlock, ErrorCode::E1003),
        (
            ParseErrorKind::ExpectedIdentifier { found: "1".into() },
            ErrorCode::E1004,
        ),
        (ParseErrorKind::InvalidAssignmentTarget, ErrorCode::E1005),
        (ParseErrorKind::TooManyArguments, ErrorCode::E1006),
        (ParseErrorKind::TooManyParameters, ErrorCode::E1007),
        (ParseErrorKind::ReturnOutsideFunction, ErrorCode::E1008),
    ];
    for (kind, code) in cases {
        assert_eq!(kind.code(), code, "{kind}");
    }
}

#[test]
fn diagnostic_carries_message_and_span() {
    let err = ParseError::at(
        ParseErrorKind::InvalidAssignmentTarget,
        &token(TokenKind::Punct, "="),
    );
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1005);
    assert_eq!(diag.message, "invalid assignment target");
    assert_eq!(diag.labels[0].span, Span::new(3, 4));
}
