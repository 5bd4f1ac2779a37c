use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Which phase produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token, raised by the lexer
    Lex,
    /// Token stream does not match the grammar, raised by the parser
    Syntax,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    /// Secondary location shown below the main one, e.g. an unclosed `(`
    note: Option<(Position, String)>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            note: None,
        }
    }

    pub fn with_note(mut self, position: Position, message: &str) -> Self {
        self.note = Some((position, message.to_string()));
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_note(&self) -> Option<&(Position, String)> {
        self.note.as_ref()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::UnterminatedChar
            | ErrorImpl::EmptyCharLiteral
            | ErrorImpl::InvalidEscape { .. }
            | ErrorImpl::InvalidLiteralCharacter { .. }
            | ErrorImpl::LeadingZero { .. }
            | ErrorImpl::InvalidIntegerSuffix { .. }
            | ErrorImpl::IntegerOverflow { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::TrailingComma { .. }
            | ErrorImpl::ExternStruct
            | ErrorImpl::DuplicateName { .. }
            | ErrorImpl::EmptyGenericList
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedChar => "UnterminatedChar",
            ErrorImpl::EmptyCharLiteral => "EmptyCharLiteral",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::InvalidLiteralCharacter { .. } => "InvalidLiteralCharacter",
            ErrorImpl::LeadingZero { .. } => "LeadingZero",
            ErrorImpl::InvalidIntegerSuffix { .. } => "InvalidIntegerSuffix",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::TrailingComma { .. } => "TrailingComma",
            ErrorImpl::ExternStruct => "ExternStruct",
            ErrorImpl::DuplicateName { .. } => "DuplicateName",
            ErrorImpl::EmptyGenericList => "EmptyGenericList",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add a closing `\"` to the string"))
            }
            ErrorImpl::UnterminatedChar => ErrorTip::Suggestion(String::from(
                "a char literal holds exactly one character, use a string for more",
            )),
            ErrorImpl::EmptyCharLiteral => ErrorTip::None,
            ErrorImpl::InvalidEscape { escape } => ErrorTip::Suggestion(format!(
                "Unknown escape `{}`, valid escapes are \\n, \\\", \\', \\\\ and \\xHH",
                escape
            )),
            ErrorImpl::InvalidLiteralCharacter { .. } => ErrorTip::Suggestion(String::from(
                "control characters must be written as escapes",
            )),
            ErrorImpl::LeadingZero { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, remove the leading zeros",
                token
            )),
            ErrorImpl::InvalidIntegerSuffix { suffix, .. } => ErrorTip::Suggestion(format!(
                "Unknown suffix `{}`, expected one of i, u, i8, i16, i32, u8, u16, u32",
                suffix
            )),
            ErrorImpl::IntegerOverflow { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, .. } if expected == "`;`" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::TrailingComma { .. } => {
                ErrorTip::Suggestion(String::from("remove the trailing comma"))
            }
            ErrorImpl::ExternStruct => {
                ErrorTip::Suggestion(String::from("only functions can be declared `extern`"))
            }
            ErrorImpl::DuplicateName { kind, name } => {
                ErrorTip::Suggestion(format!("{} `{}` is declared more than once", kind, name))
            }
            ErrorImpl::EmptyGenericList => ErrorTip::Suggestion(String::from(
                "remove the `<>` or list at least one generic",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the construct into smaller named parts",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexer
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated char literal")]
    UnterminatedChar,
    #[error("empty char literal")]
    EmptyCharLiteral,
    #[error("invalid escape sequence {escape:?}")]
    InvalidEscape { escape: String },
    #[error("invalid character {character:?} in literal")]
    InvalidLiteralCharacter { character: char },
    #[error("integer literal {token:?} has a leading zero")]
    LeadingZero { token: String },
    #[error("invalid suffix {suffix:?} on integer literal {token:?}")]
    InvalidIntegerSuffix { token: String, suffix: String },
    #[error("integer literal {token:?} is out of range")]
    IntegerOverflow { token: String },

    // Parser
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("trailing comma in {list}")]
    TrailingComma { list: String },
    #[error("structs cannot be declared `extern`")]
    ExternStruct,
    #[error("{kind} {name:?} declared more than once")]
    DuplicateName { kind: String, name: String },
    #[error("generic list cannot be empty")]
    EmptyGenericList,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
