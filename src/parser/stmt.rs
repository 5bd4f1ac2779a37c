use crate::{
    ast::{
        ast::{Field, FunctionItem, Item, ItemName, Parameter, Stmt, StructItem},
        statements::{
            BlockStmt, BreakStmt, ContinueStmt, ExpressionStmt, IfStmt, LetStmt, LoopStmt,
            ReturnStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Position,
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return parser.nested(handler);
    }

    let start = parser.get_position();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect_semicolon()?;

    Ok(Stmt::Expression(ExpressionStmt {
        expression,
        span: parser.span_from(start),
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Let)?.span.start;

    let mutable = parser.current_token_kind() == TokenKind::Mut;
    if mutable {
        parser.advance();
    }

    let identifier = parser.expect_error(TokenKind::Identifier, "variable name")?.value;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect_semicolon()?;

    Ok(Stmt::Let(LetStmt {
        mutable,
        identifier,
        explicit_type,
        assigned_value,
        span: parser.span_from(start),
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        match parser.current_token_kind() {
            TokenKind::If => Some(Box::new(parser.nested(parse_if_stmt)?)),
            TokenKind::OpenCurly => Some(Box::new(Stmt::Block(parse_block(parser)?))),
            _ => return Err(parser.unexpected("`{` or `if`")),
        }
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: parser.span_from(start),
    }))
}

pub fn parse_loop_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Loop)?.span.start;
    let body = parse_block(parser)?;

    Ok(Stmt::Loop(LoopStmt {
        body,
        span: parser.span_from(start),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::While)?.span.start;
    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: parser.span_from(start),
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Break)?.span.start;
    parser.expect_semicolon()?;

    Ok(Stmt::Break(BreakStmt {
        span: parser.span_from(start),
    }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Continue)?.span.start;
    parser.expect_semicolon()?;

    Ok(Stmt::Continue(ContinueStmt {
        span: parser.span_from(start),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Return)?.span.start;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect_semicolon()?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: parser.span_from(start),
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser
                .unexpected("statement or `}`")
                .with_note(start.clone(), "unclosed delimiter"));
        }
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body,
        span: parser.span_from(start),
    })
}

// ITEMS

pub fn parse_fn_item(parser: &mut Parser) -> Result<Item, Error> {
    let start = parser.get_position();
    parse_fn_rest(parser, start, false)
}

pub fn parse_extern_item(parser: &mut Parser) -> Result<Item, Error> {
    let start = parser.expect(TokenKind::Extern)?.span.start;

    if parser.current_token_kind() == TokenKind::Struct {
        return Err(Error::new(ErrorImpl::ExternStruct, parser.get_position()));
    }

    parse_fn_rest(parser, start, true)
}

fn parse_fn_rest(parser: &mut Parser, start: Position, is_extern: bool) -> Result<Item, Error> {
    parser.expect(TokenKind::Fn)?;
    let name = parse_item_name(parser)?;

    let parameters = parser.parse_list(
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        "parameter list",
        true,
        |parser| {
            let name = parser.expect_error(TokenKind::Identifier, "parameter name")?;
            parser.expect(TokenKind::Colon)?;
            let type_ = parse_type(parser)?;

            Ok(Parameter {
                name: name.value,
                type_,
                span: parser.span_from(name.span.start),
            })
        },
    )?;

    let names: Vec<(String, Position)> = parameters
        .iter()
        .map(|parameter| (parameter.name.clone(), parameter.span.start.clone()))
        .collect();
    parser.check_duplicates(&names, "parameter")?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    let body = match parser.current_token_kind() {
        TokenKind::OpenCurly => Some(parse_block(parser)?),
        TokenKind::Semicolon => {
            parser.advance();
            None
        }
        _ => return Err(parser.unexpected("`{` or `;`")),
    };

    Ok(Item::Function(FunctionItem {
        is_extern,
        name,
        parameters,
        return_type,
        body,
        span: parser.span_from(start),
    }))
}

pub fn parse_struct_item(parser: &mut Parser) -> Result<Item, Error> {
    let start = parser.expect(TokenKind::Struct)?.span.start;
    let name = parse_item_name(parser)?;

    let fields = parser.parse_list(
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        "field list",
        true,
        |parser| {
            let name = parser.expect_error(TokenKind::Identifier, "field name")?;
            parser.expect(TokenKind::Colon)?;
            let type_ = parse_type(parser)?;

            Ok(Field {
                name: name.value,
                type_,
                span: parser.span_from(name.span.start),
            })
        },
    )?;

    let names: Vec<(String, Position)> = fields
        .iter()
        .map(|field| (field.name.clone(), field.span.start.clone()))
        .collect();
    parser.check_duplicates(&names, "field")?;

    Ok(Item::Struct(StructItem {
        name,
        fields,
        span: parser.span_from(start),
    }))
}

/// `Name` or `Name<T, ..>` at a declaration site.
fn parse_item_name(parser: &mut Parser) -> Result<ItemName, Error> {
    let name = parser.expect_error(TokenKind::Identifier, "item name")?;

    let mut generics = vec![];
    if parser.current_token_kind() == TokenKind::Less {
        let parameters = parser.parse_list(
            TokenKind::Less,
            TokenKind::Greater,
            "generic parameters",
            false,
            |parser| {
                let token = parser.expect_error(TokenKind::Identifier, "generic parameter")?;
                Ok((token.value, token.span.start))
            },
        )?;

        parser.check_duplicates(&parameters, "generic parameter")?;
        generics = parameters.into_iter().map(|(name, _)| name).collect();
    }

    Ok(ItemName {
        name: name.value,
        generics,
        span: parser.span_from(name.span.start),
    })
}
