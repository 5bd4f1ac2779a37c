use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("struct", TokenKind::Struct);
        map.insert("extern", TokenKind::Extern);
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("loop", TokenKind::Loop);
        map.insert("while", TokenKind::While);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("return", TokenKind::Return);
        map.insert("as", TokenKind::As);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("u8", TokenKind::U8);
        map.insert("u16", TokenKind::U16);
        map.insert("u32", TokenKind::U32);
        map.insert("i8", TokenKind::I8);
        map.insert("i16", TokenKind::I16);
        map.insert("i32", TokenKind::I32);
        map.insert("bool", TokenKind::Bool);
        map.insert("unit", TokenKind::Unit);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    Char,
    String,
    Identifier,
    Underscore, // bare `_`

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,  // ||
    And, // &&
    Ampersand,

    Dot,
    Semicolon,
    Colon,
    DoubleColon,
    Comma,
    Arrow,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Fn,
    Struct,
    Extern,
    Let,
    Mut,
    If,
    Else,
    Loop,
    While,
    Break,
    Continue,
    Return,
    As,
    True,
    False,

    // Builtin types
    U8,
    U16,
    U32,
    I8,
    I16,
    I32,
    Bool,
    Unit,
}

impl TokenKind {
    /// How the kind is named in "expected ..." diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Integer => "integer literal",
            TokenKind::Char => "char literal",
            TokenKind::String => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Underscore => "`_`",
            TokenKind::OpenCurly => "`{`",
            TokenKind::CloseCurly => "`}`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Assignment => "`=`",
            TokenKind::Equals => "`==`",
            TokenKind::Not => "`!`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::Less => "`<`",
            TokenKind::LessEquals => "`<=`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEquals => "`>=`",
            TokenKind::Or => "`||`",
            TokenKind::And => "`&&`",
            TokenKind::Ampersand => "`&`",
            TokenKind::Dot => "`.`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::DoubleColon => "`::`",
            TokenKind::Comma => "`,`",
            TokenKind::Arrow => "`->`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Slash => "`/`",
            TokenKind::Star => "`*`",
            TokenKind::Percent => "`%`",
            TokenKind::Fn => "`fn`",
            TokenKind::Struct => "`struct`",
            TokenKind::Extern => "`extern`",
            TokenKind::Let => "`let`",
            TokenKind::Mut => "`mut`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Loop => "`loop`",
            TokenKind::While => "`while`",
            TokenKind::Break => "`break`",
            TokenKind::Continue => "`continue`",
            TokenKind::Return => "`return`",
            TokenKind::As => "`as`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::U8 => "`u8`",
            TokenKind::U16 => "`u16`",
            TokenKind::U32 => "`u32`",
            TokenKind::I8 => "`i8`",
            TokenKind::I16 => "`i16`",
            TokenKind::I32 => "`i32`",
            TokenKind::Bool => "`bool`",
            TokenKind::Unit => "`unit`",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Integer literal suffixes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum IntSuffix {
    I,
    U,
    I8,
    I16,
    I32,
    U8,
    U16,
    U32,
}

impl IntSuffix {
    pub fn from_suffix(suffix: &str) -> Option<IntSuffix> {
        match suffix {
            "i" => Some(IntSuffix::I),
            "u" => Some(IntSuffix::U),
            "i8" => Some(IntSuffix::I8),
            "i16" => Some(IntSuffix::I16),
            "i32" => Some(IntSuffix::I32),
            "u8" => Some(IntSuffix::U8),
            "u16" => Some(IntSuffix::U16),
            "u32" => Some(IntSuffix::U32),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntSuffix::I => "i",
            IntSuffix::U => "u",
            IntSuffix::I8 => "i8",
            IntSuffix::I16 => "i16",
            IntSuffix::I32 => "i32",
            IntSuffix::U8 => "u8",
            IntSuffix::U16 => "u16",
            IntSuffix::U32 => "u32",
        }
    }

    /// Largest literal value the suffix accepts. Signed suffixes allow the
    /// magnitude of their minimum, since the sign is a separate unary operator.
    pub fn max_value(&self) -> u64 {
        match self {
            IntSuffix::I | IntSuffix::U => u64::MAX,
            IntSuffix::I8 => 1 << 7,
            IntSuffix::I16 => 1 << 15,
            IntSuffix::I32 => 1 << 31,
            IntSuffix::U8 => u8::MAX as u64,
            IntSuffix::U16 => u16::MAX as u64,
            IntSuffix::U32 => u32::MAX as u64,
        }
    }
}

impl Display for IntSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Integer {
        value: u64,
        suffix: Option<IntSuffix>,
    },
    Char(char),
    Str(String),
    Bool(bool),
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw lexeme as written in the source
    pub value: String,
    pub literal: Option<LiteralValue>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "end of input"),
            _ => write!(f, "`{}`", self.value),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Char,
            TokenKind::Identifier,
            TokenKind::Integer,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
