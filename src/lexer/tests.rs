//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, builtin types and identifiers
//! - Integer literals and their suffixes
//! - Char and string literals with escape sequences
//! - Operators and punctuation
//! - Positions
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{IntSuffix, LiteralValue, TokenKind},
};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

fn lex_error(source: &str) -> ErrorImpl {
    let error = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Lex);
    error.get_internal_error().clone()
}

#[test]
fn test_tokenize_keywords() {
    let source = "fn struct extern let mut if else loop while break continue return as true false";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Fn,
            TokenKind::Struct,
            TokenKind::Extern,
            TokenKind::Let,
            TokenKind::Mut,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Loop,
            TokenKind::While,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Return,
            TokenKind::As,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_builtin_types() {
    assert_eq!(
        kinds("u8 u16 u32 i8 i16 i32 bool unit"),
        vec![
            TokenKind::U8,
            TokenKind::U16,
            TokenKind::U32,
            TokenKind::I8,
            TokenKind::I16,
            TokenKind::I32,
            TokenKind::Bool,
            TokenKind::Unit,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase letter i64".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    for (token, expected) in tokens
        .iter()
        .zip(["foo", "bar", "baz_123", "_underscore", "CamelCase", "letter", "i64"])
    {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, expected);
    }
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_bare_underscore() {
    assert_eq!(
        kinds("_ _a __"),
        vec![
            TokenKind::Underscore,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_bool_literals() {
    let tokens = tokenize("true false".to_string(), None).unwrap();

    assert_eq!(tokens[0].literal, Some(LiteralValue::Bool(true)));
    assert_eq!(tokens[1].literal, Some(LiteralValue::Bool(false)));
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 7 100".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    for (token, expected) in tokens.iter().zip([42, 0, 7, 100]) {
        assert_eq!(token.kind, TokenKind::Integer);
        assert_eq!(
            token.literal,
            Some(LiteralValue::Integer {
                value: expected,
                suffix: None
            })
        );
    }
}

#[test]
fn test_tokenize_integer_suffixes() {
    let source = "42u8 1i 2u 3i8 4i16 5i32 6u16 7u32 0u8".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    let expected = [
        (42, IntSuffix::U8),
        (1, IntSuffix::I),
        (2, IntSuffix::U),
        (3, IntSuffix::I8),
        (4, IntSuffix::I16),
        (5, IntSuffix::I32),
        (6, IntSuffix::U16),
        (7, IntSuffix::U32),
        (0, IntSuffix::U8),
    ];
    for (token, (value, suffix)) in tokens.iter().zip(expected) {
        assert_eq!(
            token.literal,
            Some(LiteralValue::Integer {
                value,
                suffix: Some(suffix)
            })
        );
    }
    assert_eq!(tokens[0].value, "42u8");
}

#[test]
fn test_tokenize_leading_zero() {
    assert!(matches!(lex_error("007"), ErrorImpl::LeadingZero { .. }));
    assert!(matches!(lex_error("00"), ErrorImpl::LeadingZero { .. }));
}

#[test]
fn test_tokenize_invalid_suffix() {
    match lex_error("12u64") {
        ErrorImpl::InvalidIntegerSuffix { token, suffix } => {
            assert_eq!(token, "12u64");
            assert_eq!(suffix, "u64");
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(matches!(lex_error("1abc"), ErrorImpl::InvalidIntegerSuffix { .. }));
    assert!(matches!(lex_error("3u8u8"), ErrorImpl::InvalidIntegerSuffix { .. }));
}

#[test]
fn test_tokenize_integer_overflow() {
    assert!(matches!(lex_error("256u8"), ErrorImpl::IntegerOverflow { .. }));
    assert!(matches!(lex_error("129i8"), ErrorImpl::IntegerOverflow { .. }));
    assert!(matches!(
        lex_error("99999999999999999999"),
        ErrorImpl::IntegerOverflow { .. }
    ));

    assert_eq!(kinds("255u8 128i8"), vec![TokenKind::Integer, TokenKind::Integer, TokenKind::EOF]);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "world" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    for (token, expected) in tokens.iter().zip(["hello", "world", "multiple words", ""]) {
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.literal, Some(LiteralValue::Str(expected.to_string())));
    }
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "backslash\\" "hex\x41" "it's \"ok\"" "\'""#.to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    let expected = ["hello\nworld", "backslash\\", "hexA", "it's \"ok\"", "'"];
    for (token, expected) in tokens.iter().zip(expected) {
        assert_eq!(token.literal, Some(LiteralValue::Str(expected.to_string())));
    }
}

#[test]
fn test_tokenize_string_errors() {
    assert_eq!(lex_error(r#""never closed"#), ErrorImpl::UnterminatedString);
    assert_eq!(lex_error("\"ends in escape\\"), ErrorImpl::UnterminatedString);
    assert_eq!(
        lex_error(r#""tab\t""#),
        ErrorImpl::InvalidEscape {
            escape: "\\t".to_string()
        }
    );
    assert_eq!(
        lex_error(r#""bad \xZZ""#),
        ErrorImpl::InvalidEscape {
            escape: "\\xZZ".to_string()
        }
    );
    assert_eq!(
        lex_error("\"line\nbreak\""),
        ErrorImpl::InvalidLiteralCharacter { character: '\n' }
    );
}

#[test]
fn test_tokenize_chars() {
    let source = r#"'a' '\n' '\'' '\\' '"' '\"' '\x41' ' '"#.to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    let expected = ['a', '\n', '\'', '\\', '"', '"', '\x41', ' '];
    for (token, expected) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Char);
        assert_eq!(token.literal, Some(LiteralValue::Char(expected)));
    }
    assert_eq!(tokens[6].value, r"'\x41'");
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_char_errors() {
    assert_eq!(lex_error("''"), ErrorImpl::EmptyCharLiteral);
    assert_eq!(lex_error("'ab'"), ErrorImpl::UnterminatedChar);
    assert_eq!(lex_error("'a"), ErrorImpl::UnterminatedChar);
    assert_eq!(
        lex_error(r"'\q'"),
        ErrorImpl::InvalidEscape {
            escape: "\\q".to_string()
        }
    );
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= = && || ! &";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Ampersand,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } . , ; : :: ->"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::DoubleColon,
            TokenKind::Arrow,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_maximal_munch() {
    assert_eq!(
        kinds("foo::<i32>(x)"),
        vec![
            TokenKind::Identifier,
            TokenKind::DoubleColon,
            TokenKind::Less,
            TokenKind::I32,
            TokenKind::Greater,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("a->b:::c"),
        vec![
            TokenKind::Identifier,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::DoubleColon,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("&&&mut"),
        vec![TokenKind::And, TokenKind::Ampersand, TokenKind::Mut, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_positions() {
    let source = "fn main() {\n    let x = 'a';\n}".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    let let_token = &tokens[5];
    assert_eq!(let_token.kind, TokenKind::Let);
    assert_eq!(let_token.span.start.line, 2);
    assert_eq!(let_token.span.start.column, 5);
    assert_eq!(let_token.span.start.offset, 16);

    let char_token = &tokens[8];
    assert_eq!(char_token.kind, TokenKind::Char);
    assert_eq!(char_token.span.start.column, 13);
    assert_eq!(char_token.span.end.column, 16);

    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span.start.line, 3);
    assert_eq!(eof.span.start.column, 2);
    assert_eq!(eof.span.start.file.as_str(), "test.lang");
}

#[test]
fn test_tokenize_unrecognized_token() {
    let source = "let x = @".to_string();
    let error = tokenize(source, Some("test.lang".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().offset, 8);
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_tokenize_no_comments() {
    // there is no comment syntax, so `//` is two slashes
    assert_eq!(
        kinds("a // b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
    assert!(matches!(lex_error("# comment"), ErrorImpl::UnrecognisedToken { .. }));
}

#[test]
fn test_tokenize_whitespace_handling() {
    assert_eq!(
        kinds("  let \t  x \r\n  =   42  "),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::EOF
        ]
    );
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_function_declaration() {
    let source = "fn add(a: i32, b: i32) -> i32 { return a + b; }".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "add");
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "a");
    assert_eq!(tokens[4].kind, TokenKind::Colon);
    assert_eq!(tokens[5].kind, TokenKind::I32);
}
