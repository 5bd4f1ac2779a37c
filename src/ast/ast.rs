use std::fmt::{self, Display};

use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, CallExpr, CastExpr, FieldExpr, LiteralExpr, NameExpr,
        ParenExpr, UnaryExpr,
    },
    statements::{
        BlockStmt, BreakStmt, ContinueStmt, ExpressionStmt, IfStmt, LetStmt, LoopStmt,
        ReturnStmt, WhileStmt,
    },
    types::Type,
};

/// Statement
///
/// Closed set of statement kinds. Consumers dispatch with `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    If(IfStmt),
    Loop(LoopStmt),
    While(WhileStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Return(ReturnStmt),
    Let(LetStmt),
    Block(BlockStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::If(stmt) => &stmt.span,
            Stmt::Loop(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::Break(stmt) => &stmt.span,
            Stmt::Continue(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Let(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

/// Expression
///
/// Closed set of expression kinds. Children are boxed, so the tree owns
/// every subexpression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Cast(CastExpr),
    Unary(UnaryExpr),
    Field(FieldExpr),
    Call(CallExpr),
    Literal(LiteralExpr),
    Name(NameExpr),
    Paren(ParenExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Assignment(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Cast(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Field(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Literal(expr) => &expr.span,
            Expr::Name(expr) => &expr.span,
            Expr::Paren(expr) => &expr.span,
        }
    }
}

/// Name of a struct or function, with its declared generic parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemName {
    pub name: String,
    pub generics: Vec<String>,
    pub span: Span,
}

/// A `name: Type` pair in a parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub type_: Type,
    pub span: Span,
}

/// A `name: Type` pair in a struct body.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub type_: Type,
    pub span: Span,
}

/// Function Item
///
/// `body` is `None` for declarations ending in `;`. An `extern` function may
/// still carry a body; that is left to later phases.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionItem {
    pub is_extern: bool,
    pub name: ItemName,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: Option<BlockStmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructItem {
    pub name: ItemName,
    pub fields: Vec<Field>,
    pub span: Span,
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Function(FunctionItem),
    Struct(StructItem),
}

impl Item {
    pub fn get_span(&self) -> &Span {
        match self {
            Item::Function(item) => &item.span,
            Item::Struct(item) => &item.span,
        }
    }

    pub fn get_name(&self) -> &ItemName {
        match self {
            Item::Function(item) => &item.name,
            Item::Struct(item) => &item.name,
        }
    }
}

/// The root of the tree: every item in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub items: Vec<Item>,
}

// PRINTING

impl Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.generics.is_empty() {
            write!(f, "<{}>", self.generics.join(", "))?;
        }
        Ok(())
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_)
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Function(function) => {
                if function.is_extern {
                    write!(f, "extern ")?;
                }
                write!(f, "fn {}(", function.name)?;
                super::types::write_list(f, &function.parameters)?;
                write!(f, ")")?;
                if let Some(return_type) = &function.return_type {
                    write!(f, " -> {}", return_type)?;
                }
                match &function.body {
                    Some(body) => {
                        write!(f, " ")?;
                        body.write(f, 0)
                    }
                    None => write!(f, ";"),
                }
            }
            Item::Struct(structure) => {
                write!(f, "struct {} ", structure.name)?;
                if structure.fields.is_empty() {
                    return write!(f, "{{}}");
                }

                writeln!(f, "{{")?;
                for (index, field) in structure.fields.iter().enumerate() {
                    super::statements::write_indent(f, 1)?;
                    write!(f, "{}: {}", field.name, field.type_)?;
                    if index + 1 < structure.fields.len() {
                        write!(f, ",")?;
                    }
                    writeln!(f)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}
