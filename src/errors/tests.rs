//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;

fn position(line: u32, column: u32) -> Position {
    Position::new(0, line, column, Arc::new("test.lang".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(1, 1),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Lex);
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedString, position(3, 7));

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
    assert_eq!(error.get_position().file.as_str(), "test.lang");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "item name".to_string(),
            found: "`(`".to_string(),
        },
        position(1, 4),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.to_string(), "test.lang:1:4: expected item name, found `(`");
}

#[test]
fn test_error_kinds() {
    let lex = [
        ErrorImpl::EmptyCharLiteral,
        ErrorImpl::UnterminatedChar,
        ErrorImpl::InvalidEscape {
            escape: "\\q".to_string(),
        },
        ErrorImpl::InvalidLiteralCharacter { character: '\t' },
        ErrorImpl::LeadingZero {
            token: "007".to_string(),
        },
        ErrorImpl::InvalidIntegerSuffix {
            token: "1u64".to_string(),
            suffix: "u64".to_string(),
        },
        ErrorImpl::IntegerOverflow {
            token: "256u8".to_string(),
        },
    ];
    for error in lex {
        assert_eq!(Error::new(error, position(1, 1)).kind(), ErrorKind::Lex);
    }

    let syntax = [
        ErrorImpl::TrailingComma {
            list: "call arguments".to_string(),
        },
        ErrorImpl::ExternStruct,
        ErrorImpl::DuplicateName {
            kind: "field".to_string(),
            name: "x".to_string(),
        },
        ErrorImpl::EmptyGenericList,
        ErrorImpl::NestingTooDeep { limit: 256 },
    ];
    for error in syntax {
        assert_eq!(Error::new(error, position(1, 1)).kind(), ErrorKind::Syntax);
    }
}

#[test]
fn test_missing_semicolon_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`;`".to_string(),
            found: "`}`".to_string(),
        },
        position(2, 10),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "did you miss a semicolon?"),
        ErrorTip::None => panic!("expected a tip"),
    }
}

#[test]
fn test_unexpected_token_has_no_generic_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "type".to_string(),
            found: "`;`".to_string(),
        },
        position(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_tip_mentions_the_offending_text() {
    let error = Error::new(
        ErrorImpl::InvalidIntegerSuffix {
            token: "12abc".to_string(),
            suffix: "abc".to_string(),
        },
        position(1, 1),
    );
    assert!(error.get_tip().to_string().contains("`abc`"));

    let error = Error::new(
        ErrorImpl::DuplicateName {
            kind: "parameter".to_string(),
            name: "a".to_string(),
        },
        position(1, 1),
    );
    assert_eq!(
        error.get_tip().to_string(),
        "parameter `a` is declared more than once"
    );
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::TrailingComma {
            list: "parameter list".to_string(),
        },
        position(4, 12),
    );

    assert_eq!(error.to_string(), "test.lang:4:12: trailing comma in parameter list");
}

#[test]
fn test_error_note() {
    let error = Error::new(ErrorImpl::EmptyGenericList, position(2, 8));
    assert_eq!(error.get_note(), None);

    let error = error.with_note(position(1, 3), "unclosed delimiter");
    let (note_position, message) = error.get_note().unwrap();
    assert_eq!((note_position.line, note_position.column), (1, 3));
    assert_eq!(message, "unclosed delimiter");

    // The note does not change the main message.
    assert_eq!(error.to_string(), "test.lang:2:8: generic list cannot be empty");
}
