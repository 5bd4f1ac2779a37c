//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and handler tables for items, statements and types.
//!
//! It maintains lookup tables for:
//! - Item handlers
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix and postfix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers
//!
//! Lookahead is bounded: handlers look at the current token and at most one
//! more (`peek_kind(1)`), never backtracking.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, ItemHandler, ItemLookup, LEDHandler,
        LEDLookup, NUDHandler, NUDLookup, StmtHandler, StmtLookup,
    },
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and maintains lookup tables for
/// parsing items, statements, expressions, and types. It tracks the current
/// position in the token stream and provides methods for token consumption.
pub struct Parser {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Arc<String>,
    /// Lookup table for top-level item handlers
    item_lookup: ItemLookup,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type handlers
    type_nud_lookup: TypeNUDLookup,
    /// How many recursive constructs are currently open
    depth: usize,
}

/// Deepest nesting of expressions, types and statements the parser accepts
/// before giving up with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 256;

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Shared string containing the source file name
    ///
    /// An EOF token is appended if the stream does not already end in one.
    pub fn new(mut tokens: Vec<Token>, file: Arc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position::new(0, 1, 1, Arc::clone(&file)));
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                None,
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            item_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Fails if an EOF token appears before the end of the stream.
    fn check_single_eof(&self) -> Result<(), Error> {
        let stray = self.tokens[..self.tokens.len() - 1]
            .iter()
            .position(|token| token.kind == TokenKind::EOF);

        match stray {
            Some(index) => {
                let token = &self.tokens[index + 1];
                Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: String::from("end of input"),
                        found: token.to_string(),
                    },
                    token.span.start.clone(),
                ))
            }
            None => Ok(()),
        }
    }

    /// Runs `parse` one nesting level deeper, failing once the level passes
    /// `MAX_NESTING_DEPTH`.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `n` places ahead, or EOF past the end.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the previous token.
    /// The parser never moves past EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Builds the error for the current token not matching `expected`.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
            },
            token.span.start.clone(),
        )
    }

    /// Expects a token of the specified kind, describing it as `expected`
    /// in the error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected(expected))
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, expected_kind.describe())
    }

    /// Expects a `;`. When the next token is on a later line, the error
    /// carries a note at the end of the previous token.
    pub fn expect_semicolon(&mut self) -> Result<Token, Error> {
        if self.current_token_kind() == TokenKind::Semicolon {
            return Ok(self.advance());
        }

        let error = self.unexpected(TokenKind::Semicolon.describe());
        let previous_end = self.previous_end();
        if self.pos > 0 && self.get_position().line > previous_end.line {
            Err(error.with_note(previous_end, "maybe you missed a `;`?"))
        } else {
            Err(error)
        }
    }

    /// Expects the token closing a delimiter opened at `opener`.
    pub fn expect_closing(
        &mut self,
        close: TokenKind,
        expected: &str,
        opener: &Position,
    ) -> Result<Token, Error> {
        if close == TokenKind::Greater {
            return self
                .expect_closing_angle()
                .map_err(|error| error.with_note(opener.clone(), "unclosed delimiter"));
        }

        self.expect_error(close, expected)
            .map_err(|error| error.with_note(opener.clone(), "unclosed delimiter"))
    }

    /// Expects the `>` closing a generic list.
    ///
    /// A `>=` is split so that `let x: List<u8>= y;` still closes the list.
    pub fn expect_closing_angle(&mut self) -> Result<Token, Error> {
        if self.current_token_kind() == TokenKind::GreaterEquals {
            let token = self.tokens[self.pos].clone();
            let mut middle = token.span.start.clone();
            middle.offset += 1;
            middle.column += 1;

            self.tokens[self.pos] = MK_TOKEN!(
                TokenKind::Assignment,
                String::from("="),
                None,
                Span {
                    start: middle.clone(),
                    end: token.span.end.clone()
                }
            );

            return Ok(MK_TOKEN!(
                TokenKind::Greater,
                String::from(">"),
                None,
                Span {
                    start: token.span.start,
                    end: middle
                }
            ));
        }

        self.expect_error(TokenKind::Greater, "`,` or `>`")
    }

    /// Parses `open`, then a comma-separated list up to and including
    /// `close`.
    ///
    /// Trailing commas are rejected. `allow_empty` controls whether the list
    /// may be closed right away.
    pub fn parse_list<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        list: &str,
        allow_empty: bool,
        mut parse_item: impl FnMut(&mut Parser) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let opener = self.expect(open)?.span.start;
        let mut items = Vec::new();

        if self.current_token_kind() == close {
            if !allow_empty {
                return Err(Error::new(ErrorImpl::EmptyGenericList, self.get_position()));
            }
            self.advance();
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);

            if self.current_token_kind() == TokenKind::Comma {
                let comma = self.advance();
                if self.current_token_kind() == close {
                    return Err(Error::new(
                        ErrorImpl::TrailingComma {
                            list: list.to_string(),
                        },
                        comma.span.start,
                    ));
                }
            } else {
                self.expect_closing(close, &format!("`,` or {}", close.describe()), &opener)?;
                return Ok(items);
            }
        }
    }

    /// Fails on the first name that appears twice, pointing at the repeat.
    pub fn check_duplicates(&self, names: &[(String, Position)], kind: &str) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for (name, position) in names {
            if !seen.insert(name.as_str()) {
                return Err(Error::new(
                    ErrorImpl::DuplicateName {
                        kind: kind.to_string(),
                        name: name.clone(),
                    },
                    position.clone(),
                ));
            }
        }
        Ok(())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the item lookup table.
    pub fn get_item_lookup(&self) -> &ItemLookup {
        &self.item_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Binding power of the current token, `Default` if it is not an operator.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.current_token_kind())
            .unwrap_or(&BindingPower::Default)
    }

    /// Returns a reference to the type lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a top-level item handler for a token.
    pub fn item(&mut self, kind: TokenKind, item_fn: ItemHandler) {
        self.item_lookup.insert(kind, item_fn);
    }

    /// Registers a type handler for a token.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Returns the end of the last consumed token.
    pub fn previous_end(&self) -> Position {
        match self.pos.checked_sub(1) {
            Some(previous) => self.tokens[previous].span.end.clone(),
            None => Position::new(0, 1, 1, Arc::clone(&self.file)),
        }
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.previous_end(),
        }
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses items until EOF. An EOF token
/// before the end of `tokens` is rejected. The first error aborts the parse;
/// no partial program is returned.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Shared string containing the source file name
pub fn parse(tokens: Vec<Token>, file: Arc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, Arc::clone(&file));
    parser.check_single_eof()?;
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut items = vec![];

    while parser.has_tokens() {
        let handler = parser
            .get_item_lookup()
            .get(&parser.current_token_kind())
            .copied()
            .ok_or_else(|| parser.unexpected("`fn`, `struct` or `extern`"))?;

        let item = handler(&mut parser)?;
        trace!("parsed item `{}`", item.get_name().name);
        items.push(item);
    }

    debug!("parsed {} items from {}", items.len(), file);
    Ok(Program { items })
}
