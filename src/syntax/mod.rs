/// Syntax module
/// Contains the object representation of the language
///
/// Submodules:
/// - grammar: Delimiter, group sizes and reading direction
/// - nodes: Root and child nodes and the chain linking them
pub mod grammar;
pub mod nodes;
