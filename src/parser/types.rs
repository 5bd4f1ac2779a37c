//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - The inferred type `_`
//! - Pointer types (`*T`, `*mut T`)
//! - Function types (`fn(T, ..) -> R`)
//! - Named types with generic arguments (`List<T>`)
//! - Builtin types
//!
//! Every type form starts with a distinct token, so a single NUD table
//! is enough and there is no binding power for types.

use std::collections::HashMap;

use crate::{
    ast::types::{BuiltinType, FunctionType, Type},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
///
/// # Arguments
///
/// * `parser` - Mutable reference to the parser to initialize
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Underscore, parse_inferred_type);
    parser.type_nud(TokenKind::Star, parse_pointer_type);
    parser.type_nud(TokenKind::Fn, parse_function_type);
    parser.type_nud(TokenKind::Identifier, parse_named_type);

    for kind in [
        TokenKind::U8,
        TokenKind::U16,
        TokenKind::U32,
        TokenKind::I8,
        TokenKind::I16,
        TokenKind::I32,
        TokenKind::Bool,
        TokenKind::Unit,
    ] {
        parser.type_nud(kind, parse_builtin_type);
    }
}

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let nud = parser
        .get_type_nud_lookup()
        .get(&parser.current_token_kind())
        .copied()
        .ok_or_else(|| parser.unexpected("type"))?;

    parser.nested(nud)
}

/// Parses `<T, ..>`. The list may not be empty.
pub fn parse_type_arguments(parser: &mut Parser) -> Result<Vec<Type>, Error> {
    parser.parse_list(TokenKind::Less, TokenKind::Greater, "generic arguments", false, parse_type)
}

pub fn parse_inferred_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::Underscore)?;
    Ok(Type::Inferred)
}

pub fn parse_pointer_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::Star)?;

    let mutable = parser.current_token_kind() == TokenKind::Mut;
    if mutable {
        parser.advance();
    }

    Ok(Type::pointer(mutable, parse_type(parser)?))
}

pub fn parse_function_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::Fn)?;

    let parameters = parser.parse_list(
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        "function type parameters",
        true,
        parse_type,
    )?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        Some(Box::new(parse_type(parser)?))
    } else {
        None
    };

    Ok(Type::Function(FunctionType {
        parameters,
        return_type,
    }))
}

pub fn parse_named_type(parser: &mut Parser) -> Result<Type, Error> {
    let name = parser.expect_error(TokenKind::Identifier, "type")?.value;

    let generics = if parser.current_token_kind() == TokenKind::Less {
        parse_type_arguments(parser)?
    } else {
        vec![]
    };

    Ok(Type::named(&name, generics))
}

pub fn parse_builtin_type(parser: &mut Parser) -> Result<Type, Error> {
    let builtin = match parser.current_token_kind() {
        TokenKind::U8 => BuiltinType::U8,
        TokenKind::U16 => BuiltinType::U16,
        TokenKind::U32 => BuiltinType::U32,
        TokenKind::I8 => BuiltinType::I8,
        TokenKind::I16 => BuiltinType::I16,
        TokenKind::I32 => BuiltinType::I32,
        TokenKind::Bool => BuiltinType::Bool,
        TokenKind::Unit => BuiltinType::Unit,
        _ => return Err(parser.unexpected("type")),
    };
    parser.advance();

    Ok(Type::Builtin(builtin))
}
