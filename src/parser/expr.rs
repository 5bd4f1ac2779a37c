use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, CallArg, CallExpr, CastExpr, FieldExpr, Literal,
            LiteralExpr, NameExpr, ParenExpr, UnaryExpr, UnaryOp,
        },
    },
    errors::errors::Error,
    lexer::tokens::{LiteralValue, TokenKind},
    Span,
};

use super::{
    lookups::{binary_operator, unary_operator, BindingPower},
    parser::Parser,
    types::{parse_type, parse_type_arguments},
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nested(|parser| parse_expr_at(parser, bp))
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied()
        .ok_or_else(|| parser.unexpected("expression"))?;

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while parser.current_binding_power() > bp {
        let led = match parser.get_led_lookup().get(&parser.current_token_kind()) {
            Some(led) => *led,
            None => break,
        };

        let current_bp = parser.current_binding_power();
        left = led(parser, left, current_bp)?;
    }

    Ok(left)
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = match &parser.current_token().literal {
        Some(LiteralValue::Integer { value, suffix }) => Literal::Integer {
            value: *value,
            suffix: *suffix,
        },
        Some(LiteralValue::Char(value)) => Literal::Char(*value),
        Some(LiteralValue::Str(value)) => Literal::Str(value.clone()),
        Some(LiteralValue::Bool(value)) => Literal::Bool(*value),
        None => return Err(parser.unexpected("literal")),
    };

    Ok(Expr::Literal(LiteralExpr {
        value,
        span: parser.advance().span,
    }))
}

/// A name, optionally followed by a turbofish (`name::<T, ..>`).
pub fn parse_name_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    let mut generics = vec![];

    if parser.current_token_kind() == TokenKind::DoubleColon
        && parser.peek_kind(1) == TokenKind::Less
    {
        parser.advance();
        generics = parse_type_arguments(parser)?;
    }

    Ok(Expr::Name(NameExpr {
        name: token.value,
        generics,
        span: parser.span_from(token.span.start),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start;
    let inner = parse_expr(parser, BindingPower::Default)?;
    parser.expect_closing(TokenKind::CloseParen, "`)`", &start)?;

    Ok(Expr::Paren(ParenExpr {
        inner: Box::new(inner),
        span: parser.span_from(start),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let mut operator = match unary_operator(operator_token.kind) {
        Some(operator) => operator,
        None => return Err(parser.unexpected("expression")),
    };

    if operator == UnaryOp::AddressOf && parser.current_token_kind() == TokenKind::Mut {
        parser.advance();
        operator = UnaryOp::AddressOfMut;
    }

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        span: Span {
            start: operator_token.span.start,
            end: operand.get_span().end.clone(),
        },
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = match binary_operator(parser.current_token_kind()) {
        Some(operator) => operator,
        None => return Err(parser.unexpected("binary operator")),
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// Right-associative: the value is parsed one level below `=`.
pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Assignment(AssignmentExpr {
        span: left.get_span().to(value.get_span()),
        assignee: Box::new(left),
        value: Box::new(value),
    }))
}

pub fn parse_cast_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::As)?;
    let target = parse_type(parser)?;

    Ok(Expr::Cast(CastExpr {
        span: parser.span_from(left.get_span().start.clone()),
        expr: Box::new(left),
        target,
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let arguments = parser.parse_list(
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        "call arguments",
        true,
        parse_call_arg,
    )?;

    Ok(Expr::Call(CallExpr {
        span: parser.span_from(left.get_span().start.clone()),
        callee: Box::new(left),
        arguments,
    }))
}

/// `value` or `name: value`. An identifier directly followed by `:` names
/// the argument.
fn parse_call_arg(parser: &mut Parser) -> Result<CallArg, Error> {
    let start = parser.get_position();

    let name = if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_kind(1) == TokenKind::Colon
    {
        let name = parser.advance().value;
        parser.advance();
        Some(name)
    } else {
        None
    };

    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(CallArg {
        name,
        value,
        span: parser.span_from(start),
    })
}

pub fn parse_field_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::Dot)?;
    let field = parser.expect_error(TokenKind::Identifier, "field name")?;

    Ok(Expr::Field(FieldExpr {
        span: left.get_span().to(&field.span),
        receiver: Box::new(left),
        field: field.value,
    }))
}
