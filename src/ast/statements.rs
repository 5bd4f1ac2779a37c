use std::fmt::{self, Display};

use crate::Span;

use super::{
    ast::{Expr, Stmt},
    types::Type,
};

/// Expression Statement
/// An expression terminated by `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// Block Statement
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// Let Statement
///
/// `let mut? name (: Type)? (= value)?;`. The three optional parts are independent.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub mutable: bool,
    pub identifier: String,
    pub explicit_type: Option<Type>,
    pub assigned_value: Option<Expr>,
    pub span: Span,
}

/// If Statement
///
/// The else branch is either a `Stmt::Block` or, for `else if`, a `Stmt::If`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: BlockStmt,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopStmt {
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

// PRINTING

const INDENT: &str = "    ";

pub(crate) fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        write!(f, "{}", INDENT)?;
    }
    Ok(())
}

impl BlockStmt {
    /// Writes the block with its closing brace at `depth`. The opening brace
    /// goes wherever the caller left the cursor.
    pub(crate) fn write(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if self.body.is_empty() {
            return write!(f, "{{}}");
        }

        writeln!(f, "{{")?;
        for stmt in &self.body {
            write_indent(f, depth + 1)?;
            stmt.write(f, depth + 1)?;
            writeln!(f)?;
        }
        write_indent(f, depth)?;
        write!(f, "}}")
    }
}

impl Stmt {
    /// Writes the statement without leading indentation or trailing newline.
    pub(crate) fn write(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Stmt::If(stmt) => {
                write!(f, "if {} ", stmt.condition)?;
                stmt.then_body.write(f, depth)?;
                if let Some(else_body) = &stmt.else_body {
                    write!(f, " else ")?;
                    else_body.write(f, depth)?;
                }
                Ok(())
            }
            Stmt::Loop(stmt) => {
                write!(f, "loop ")?;
                stmt.body.write(f, depth)
            }
            Stmt::While(stmt) => {
                write!(f, "while {} ", stmt.condition)?;
                stmt.body.write(f, depth)
            }
            Stmt::Break(_) => write!(f, "break;"),
            Stmt::Continue(_) => write!(f, "continue;"),
            Stmt::Return(stmt) => match &stmt.value {
                Some(value) => write!(f, "return {};", value),
                None => write!(f, "return;"),
            },
            Stmt::Let(stmt) => {
                write!(f, "let ")?;
                if stmt.mutable {
                    write!(f, "mut ")?;
                }
                write!(f, "{}", stmt.identifier)?;
                if let Some(explicit_type) = &stmt.explicit_type {
                    write!(f, ": {}", explicit_type)?;
                }
                if let Some(value) = &stmt.assigned_value {
                    write!(f, " = {}", value)?;
                }
                write!(f, ";")
            }
            Stmt::Block(block) => block.write(f, depth),
            Stmt::Expression(stmt) => write!(f, "{};", stmt.expression),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, 0)
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, 0)
    }
}
