use std::fmt::Display;

use crate::{lexer::tokens::IntSuffix, Span};

use super::{
    ast::Expr,
    types::{write_list, Type},
};

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Integer {
        value: u64,
        suffix: Option<IntSuffix>,
    },
    Char(char),
    Str(String),
}

/// Literal Expression
/// Represents a bool, integer, char or string literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

/// Name Expression
/// Represents a reference to a name, with explicit generics when written
/// as `name::<T, ..>`.
#[derive(Debug, Clone, PartialEq)]
pub struct NameExpr {
    pub name: String,
    pub generics: Vec<Type>,
    pub span: Span,
}

/// Parenthesised Expression
#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

/// Precedence group of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryCategory {
    LogicalOr,
    LogicalAnd,
    Equality,
    Comparison,
    Sum,
    Product,
}

impl BinaryOp {
    pub fn category(&self) -> BinaryCategory {
        match self {
            BinaryOp::Or => BinaryCategory::LogicalOr,
            BinaryOp::And => BinaryCategory::LogicalAnd,
            BinaryOp::Equal | BinaryOp::NotEqual => BinaryCategory::Equality,
            BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => {
                BinaryCategory::Comparison
            }
            BinaryOp::Add | BinaryOp::Subtract => BinaryCategory::Sum,
            BinaryOp::Multiply | BinaryOp::Divide | BinaryOp::Modulo => BinaryCategory::Product,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    Deref,
    AddressOf,
    AddressOfMut,
    Not,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Deref => "*",
            UnaryOp::AddressOf => "&",
            UnaryOp::AddressOfMut => "&mut ",
            UnaryOp::Not => "!",
        }
    }
}

/// Binary Expression
/// Logical, equality, comparison, sum and product operations.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Unary Expression
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Cast Expression
/// `expr as Type`
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub expr: Box<Expr>,
    pub target: Type,
    pub span: Span,
}

/// Assignment Expression
/// Right-associative, so `a = b = c` is `a = (b = c)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub value: Box<Expr>,
    pub span: Span,
}

// POSTFIX

/// Field Expression
/// `receiver.field`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldExpr {
    pub receiver: Box<Expr>,
    pub field: String,
    pub span: Span,
}

/// A single call argument, optionally named (`name: value`).
#[derive(Debug, Clone, PartialEq)]
pub struct CallArg {
    pub name: Option<String>,
    pub value: Expr,
    pub span: Span,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<CallArg>,
    pub span: Span,
}

// PRINTING

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Integer { value, suffix } => match suffix {
                Some(suffix) => write!(f, "{}{}", value, suffix),
                None => write!(f, "{}", value),
            },
            Literal::Char(value) => write!(f, "'{}'", escape_char(*value, '\'')),
            Literal::Str(value) => {
                write!(f, "\"")?;
                for ch in value.chars() {
                    write!(f, "{}", escape_char(ch, '"'))?;
                }
                write!(f, "\"")
            }
        }
    }
}

/// Escapes `ch` for a literal delimited by `quote`.
fn escape_char(ch: char, quote: char) -> String {
    match ch {
        '\n' => String::from("\\n"),
        '\\' => String::from("\\\\"),
        _ if ch == quote => format!("\\{}", ch),
        _ if ch.is_control() => format!("\\x{:02X}", ch as u32),
        _ => ch.to_string(),
    }
}

impl Display for CallArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}: {}", name, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Assignment(expr) => write!(f, "{} = {}", expr.assignee, expr.value),
            Expr::Binary(expr) => {
                write!(f, "{} {} {}", expr.left, expr.operator.as_str(), expr.right)
            }
            Expr::Cast(expr) => write!(f, "{} as {}", expr.expr, expr.target),
            Expr::Unary(expr) => {
                let operand = expr.operand.to_string();
                // `& &x` must not become `&&x`
                if expr.operator == UnaryOp::AddressOf && operand.starts_with('&') {
                    write!(f, "& {}", operand)
                } else {
                    write!(f, "{}{}", expr.operator.as_str(), operand)
                }
            }
            Expr::Field(expr) => write!(f, "{}.{}", expr.receiver, expr.field),
            Expr::Call(expr) => {
                write!(f, "{}(", expr.callee)?;
                write_list(f, &expr.arguments)?;
                write!(f, ")")
            }
            Expr::Literal(expr) => write!(f, "{}", expr.value),
            Expr::Name(expr) => {
                write!(f, "{}", expr.name)?;
                if !expr.generics.is_empty() {
                    write!(f, "::<")?;
                    write_list(f, &expr.generics)?;
                    write!(f, ">")?;
                }
                Ok(())
            }
            Expr::Paren(expr) => write!(f, "({})", expr.inner),
        }
    }
}
