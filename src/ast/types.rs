//! Type annotations as written in source.
//!
//! Types carry no spans, so two annotations compare equal whenever they
//! spell the same type.

use std::fmt::Display;

/// The fixed set of builtin types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    U8,
    U16,
    U32,
    I8,
    I16,
    I32,
    Bool,
    Unit,
}

impl BuiltinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinType::U8 => "u8",
            BuiltinType::U16 => "u16",
            BuiltinType::U32 => "u32",
            BuiltinType::I8 => "i8",
            BuiltinType::I16 => "i16",
            BuiltinType::I32 => "i32",
            BuiltinType::Bool => "bool",
            BuiltinType::Unit => "unit",
        }
    }
}

/// `*T` or `*mut T`
#[derive(Debug, Clone, PartialEq)]
pub struct PointerType {
    pub mutable: bool,
    pub inner: Box<Type>,
}

/// `fn(T, ..)` with an optional `-> R`. A missing return type means unit.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub parameters: Vec<Type>,
    pub return_type: Option<Box<Type>>,
}

/// A user type such as `List<T>`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    pub name: String,
    pub generics: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// `_`
    Inferred,
    Pointer(PointerType),
    Function(FunctionType),
    Named(NamedType),
    Builtin(BuiltinType),
}

impl Type {
    pub fn pointer(mutable: bool, inner: Type) -> Type {
        Type::Pointer(PointerType {
            mutable,
            inner: Box::new(inner),
        })
    }

    pub fn named(name: &str, generics: Vec<Type>) -> Type {
        Type::Named(NamedType {
            name: name.to_string(),
            generics,
        })
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Inferred => write!(f, "_"),
            Type::Pointer(pointer) => {
                if pointer.mutable {
                    write!(f, "*mut {}", pointer.inner)
                } else {
                    write!(f, "*{}", pointer.inner)
                }
            }
            Type::Function(function) => {
                write!(f, "fn(")?;
                write_list(f, &function.parameters)?;
                write!(f, ")")?;
                if let Some(return_type) = &function.return_type {
                    write!(f, " -> {}", return_type)?;
                }
                Ok(())
            }
            Type::Named(named) => {
                write!(f, "{}", named.name)?;
                if !named.generics.is_empty() {
                    write!(f, "<")?;
                    write_list(f, &named.generics)?;
                    write!(f, ">")?;
                }
                Ok(())
            }
            Type::Builtin(builtin) => write!(f, "{}", builtin.as_str()),
        }
    }
}

/// Writes `items` separated by `, `.
pub fn write_list<T: Display>(f: &mut std::fmt::Formatter<'_>, items: &[T]) -> std::fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
