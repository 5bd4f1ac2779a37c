use std::{str::CharIndices, sync::Arc};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{IntSuffix, LiteralValue, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order, so longer punctuation comes before its prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9][a-zA-Z0-9_]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new("^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^::").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::DoubleColon, "::") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^->").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.pos as u32, self.line, self.column, Arc::clone(&self.file))
    }

    /// Moves past `n` bytes, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Pushes a token for the lexeme at the current position and moves past it.
    pub fn push_token(&mut self, kind: TokenKind, value: String, literal: Option<LiteralValue>) {
        let start = self.position();
        self.advance_n(value.len());
        let span = Span {
            start,
            end: self.position(),
        };
        self.push(MK_TOKEN!(kind, value, literal, span));
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Text matched by an anchored pattern at the current position.
    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);

    if value == "_" {
        lexer.push_token(TokenKind::Underscore, value, None);
    } else if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        let literal = match kind {
            TokenKind::True => Some(LiteralValue::Bool(true)),
            TokenKind::False => Some(LiteralValue::Bool(false)),
            _ => None,
        };
        lexer.push_token(*kind, value, literal);
    } else {
        lexer.push_token(TokenKind::Identifier, value, None);
    }

    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let literal = decode_integer(&matched).map_err(|error| Error::new(error, lexer.position()))?;

    lexer.push_token(TokenKind::Integer, matched, Some(literal));
    Ok(())
}

/// Splits a numeral into its digit run and optional suffix and checks its range.
fn decode_integer(text: &str) -> Result<LiteralValue, ErrorImpl> {
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, suffix_text) = text.split_at(digits_end);

    if digits.len() > 1 && digits.starts_with('0') {
        return Err(ErrorImpl::LeadingZero {
            token: text.to_string(),
        });
    }

    let suffix = if suffix_text.is_empty() {
        None
    } else {
        Some(
            IntSuffix::from_suffix(suffix_text).ok_or_else(|| ErrorImpl::InvalidIntegerSuffix {
                token: text.to_string(),
                suffix: suffix_text.to_string(),
            })?,
        )
    };

    let overflow = || ErrorImpl::IntegerOverflow {
        token: text.to_string(),
    };
    let value: u64 = digits.parse().map_err(|_| overflow())?;

    if let Some(suffix) = suffix {
        if value > suffix.max_value() {
            return Err(overflow());
        }
    }

    Ok(LiteralValue::Integer { value, suffix })
}

fn string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let (raw, value) =
        scan_string(lexer.remainder()).map_err(|error| Error::new(error, lexer.position()))?;

    lexer.push_token(TokenKind::String, raw, Some(LiteralValue::Str(value)));
    Ok(())
}

/// Scans a string literal starting at its opening quote.
/// Returns the raw lexeme and the decoded contents.
fn scan_string(rest: &str) -> Result<(String, String), ErrorImpl> {
    let mut chars = rest.char_indices();
    chars.next(); // opening quote

    let mut result = String::new();
    loop {
        match chars.next() {
            None => return Err(ErrorImpl::UnterminatedString),
            Some((end, '"')) => return Ok((rest[..=end].to_string(), result)),
            Some((_, '\\')) => result.push(decode_escape(&mut chars, ErrorImpl::UnterminatedString)?),
            Some((_, ch)) if ch.is_control() => {
                return Err(ErrorImpl::InvalidLiteralCharacter { character: ch })
            }
            // a raw `'` is fine inside a string
            Some((_, ch)) => result.push(ch),
        }
    }
}

fn char_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let (raw, value) =
        scan_char(lexer.remainder()).map_err(|error| Error::new(error, lexer.position()))?;

    lexer.push_token(TokenKind::Char, raw, Some(LiteralValue::Char(value)));
    Ok(())
}

/// Scans a char literal starting at its opening quote.
fn scan_char(rest: &str) -> Result<(String, char), ErrorImpl> {
    let mut chars = rest.char_indices();
    chars.next(); // opening quote

    let value = match chars.next() {
        None => return Err(ErrorImpl::UnterminatedChar),
        Some((_, '\'')) => return Err(ErrorImpl::EmptyCharLiteral),
        Some((_, '\\')) => decode_escape(&mut chars, ErrorImpl::UnterminatedChar)?,
        Some((_, ch)) if ch.is_control() => {
            return Err(ErrorImpl::InvalidLiteralCharacter { character: ch })
        }
        // includes the `'"'` form
        Some((_, ch)) => ch,
    };

    match chars.next() {
        Some((end, '\'')) => Ok((rest[..=end].to_string(), value)),
        _ => Err(ErrorImpl::UnterminatedChar),
    }
}

/// Decodes the escape following a backslash.
fn decode_escape(chars: &mut CharIndices, unterminated: ErrorImpl) -> Result<char, ErrorImpl> {
    match chars.next() {
        None => Err(unterminated),
        Some((_, 'n')) => Ok('\n'),
        Some((_, '"')) => Ok('"'),
        Some((_, '\'')) => Ok('\''),
        Some((_, '\\')) => Ok('\\'),
        Some((_, 'x')) => {
            let mut hex = String::new();
            for _ in 0..2 {
                match chars.next() {
                    Some((_, ch)) => hex.push(ch),
                    None => return Err(unterminated),
                }
            }

            if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
                return Err(ErrorImpl::InvalidEscape {
                    escape: format!("\\x{}", hex),
                });
            }

            u8::from_str_radix(&hex, 16)
                .map(char::from)
                .map_err(|_| ErrorImpl::InvalidEscape {
                    escape: format!("\\x{}", hex),
                })
        }
        Some((_, other)) => Err(ErrorImpl::InvalidEscape {
            escape: format!("\\{}", other),
        }),
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: lex.at().map(String::from).unwrap_or_default(),
                    },
                    lex.position(),
                ))
            }
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        None,
        Span {
            start: end.clone(),
            end
        }
    ));

    debug!("tokenized {} into {} tokens", lex.file, lex.tokens.len());
    Ok(lex.tokens)
}
