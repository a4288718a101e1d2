/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, statement, expression and type declaration enums
/// - expressions: Literal, operator and closure nodes
/// - statements: Let declaration and return statement nodes
/// - types: Closure type and type list nodes
///
/// Every node implements `Display`, printing Toy source that parses back
/// to an equal tree.
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
