use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
    let config = LexerConfig::quill();
    Lexer::new(source, &config)
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

#[test]
fn empty_source_yields_single_end() {
    let config = LexerConfig::quill();
    let mut lexer = Lexer::new("", &config);
    assert!(lexer.has_more());
    let end = lexer.next_token();
    assert!(end.is_end());
    assert!(!lexer.has_more());
    assert_eq!(lexer.next(), None);
    // Direct calls past the end keep returning End.
    assert!(lexer.next_token().is_end());
}

#[test]
fn var_declaration() {
    assert_eq!(
        kinds("var x = 42;"),
        vec![
            (TokenKind::Keyword, "var"),
            (TokenKind::Symbol, "x"),
            (TokenKind::Punct, "="),
            (TokenKind::Int(42), "42"),
            (TokenKind::Punct, ";"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn longer_operators_win() {
    assert_eq!(
        kinds("a>=b==c!=!d<=e"),
        vec![
            (TokenKind::Symbol, "a"),
            (TokenKind::Punct, ">="),
            (TokenKind::Symbol, "b"),
            (TokenKind::Punct, "=="),
            (TokenKind::Symbol, "c"),
            (TokenKind::Punct, "!="),
            (TokenKind::Punct, "!"),
            (TokenKind::Symbol, "d"),
            (TokenKind::Punct, "<="),
            (TokenKind::Symbol, "e"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn punct_table_order_is_load_bearing() {
    // With `>` listed first, `>=` can never match.
    let config = LexerConfig::new().with_puncts([">", ">=", "="]);
    let lexemes: Vec<_> = Lexer::new(">=", &config).map(|t| t.lexeme).collect();
    assert_eq!(lexemes, vec![">", "=", ""]);
}

#[test]
fn newlines_are_tokens_and_advance_rows() {
    let config = LexerConfig::quill();
    let tokens = tokenize("a\n  b", &config);
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[0].loc, Location::new(1, 1));
    assert_eq!(tokens[2].loc, Location::new(2, 3));
    assert_eq!(tokens[2].span, Span::new(4, 5));
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("x // trailing\n/* block\n spanning */ y"),
        vec![
            (TokenKind::Symbol, "x"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Symbol, "y"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn location_after_block_comment() {
    let config = LexerConfig::quill();
    let tokens = tokenize("/* a\nbc */ z", &config);
    assert_eq!(tokens[0].lexeme, "z");
    assert_eq!(tokens[0].loc, Location::new(2, 7));
}

#[test]
fn block_comments_do_not_nest() {
    assert_eq!(
        kinds("/* /* */ */"),
        vec![
            (TokenKind::Punct, "*"),
            (TokenKind::Punct, "/"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn unterminated_block_comment_is_invalid() {
    assert_eq!(
        kinds("x /* never"),
        vec![
            (TokenKind::Symbol, "x"),
            (
                TokenKind::Invalid(LexError::UnterminatedComment),
                "/* never"
            ),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn keywords_come_from_the_table() {
    assert_eq!(kinds("while")[0].0, TokenKind::Keyword);
    assert_eq!(kinds("whilex")[0].0, TokenKind::Symbol);
    assert_eq!(kinds("_tmp1")[0].0, TokenKind::Symbol);

    let config = LexerConfig::new().with_keywords(["let"]);
    let tokens = tokenize("let while", &config);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].kind, TokenKind::Symbol);
}

#[test]
fn integers_accumulate_and_overflow_is_rejected() {
    assert_eq!(kinds("007")[0].0, TokenKind::Int(7));
    assert_eq!(
        kinds("9223372036854775807")[0].0,
        TokenKind::Int(9_223_372_036_854_775_807)
    );
    assert_eq!(
        kinds("9223372036854775808")[0],
        (
            TokenKind::Invalid(LexError::IntegerTooLarge),
            "9223372036854775808"
        )
    );
    assert_eq!(
        kinds("123456789012345678901234567890")[0].0,
        TokenKind::Invalid(LexError::IntegerTooLarge)
    );
}

#[test]
fn digits_then_letters_split() {
    assert_eq!(
        kinds("12ab"),
        vec![
            (TokenKind::Int(12), "12"),
            (TokenKind::Symbol, "ab"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn string_literals_keep_raw_lexeme() {
    assert_eq!(
        kinds(r#"print("a \"q\"\n");"#),
        vec![
            (TokenKind::Symbol, "print"),
            (TokenKind::Punct, "("),
            (TokenKind::Str, r#""a \"q\"\n""#),
            (TokenKind::Punct, ")"),
            (TokenKind::Punct, ";"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn unterminated_string_is_invalid() {
    assert_eq!(
        kinds("\"open"),
        vec![
            (TokenKind::Invalid(LexError::UnterminatedString), "\"open"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn unexpected_characters_consume_one_char() {
    assert_eq!(
        kinds("a@é"),
        vec![
            (TokenKind::Symbol, "a"),
            (TokenKind::Invalid(LexError::UnexpectedChar), "@"),
            (TokenKind::Invalid(LexError::UnexpectedChar), "é"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn carriage_returns_are_whitespace() {
    assert_eq!(
        kinds("a\r\nb"),
        vec![
            (TokenKind::Symbol, "a"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Symbol, "b"),
            (TokenKind::End, ""),
        ]
    );
}

// === Property tests ===

mod proptest_lexer {
    use super::super::tokenize;
    use crate::LexerConfig;
    use proptest::prelude::*;
    use quill_ir::TokenKind;

    fn word() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z_][a-z0-9_]{0,6}",
            "[0-9]{1,9}",
            Just("(".to_owned()),
            Just(")".to_owned()),
            Just("{".to_owned()),
            Just("}".to_owned()),
            Just(";".to_owned()),
            Just(">=".to_owned()),
            Just("==".to_owned()),
            Just("!".to_owned()),
            Just("+".to_owned()),
            Just("\"str \\\" lit\"".to_owned()),
        ]
    }

    proptest! {
        #[test]
        fn lexing_arbitrary_input_terminates_with_one_end(source in "\\PC{0,64}") {
            let config = LexerConfig::quill();
            let tokens = tokenize(&source, &config);
            let ends = tokens.iter().filter(|t| t.is_end()).count();
            prop_assert_eq!(ends, 1);
            prop_assert!(tokens.last().is_some_and(|t| t.is_end()));
        }

        #[test]
        fn lexemes_are_the_text_under_their_spans(source in "\\PC{0,64}") {
            let config = LexerConfig::quill();
            let mut previous_end = 0;
            for token in tokenize(&source, &config) {
                prop_assert!(token.span.start >= previous_end);
                prop_assert_eq!(&source[token.span.to_range()], token.lexeme);
                previous_end = token.span.end;
            }
        }

        #[test]
        fn space_separated_words_round_trip(words in proptest::collection::vec(word(), 0..16)) {
            let source = words.join(" ");
            let config = LexerConfig::quill();
            let lexemes: Vec<_> = tokenize(&source, &config)
                .into_iter()
                .filter(|t| t.kind != TokenKind::End)
                .map(|t| t.lexeme.to_owned())
                .collect();
            prop_assert_eq!(lexemes, words);
        }
    }
}
