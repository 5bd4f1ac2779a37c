/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Items, the program root, and the statement/expression enums
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the statement node kinds
/// - types: Definitions for type annotations
///
/// Every node implements `Display`, printing it back as source text.
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
