//! # ucdl
//!
//! Tokenizer and parser for PlantUML-style use-case diagrams.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! syntax    → AST types, ParseError, text → Diagram entry points
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, grammar traits
//!   ↓
//! base      → Primitives (TextRange, LineIndex)
//! ```
//!
//! ## Example
//!
//! ```
//! let diagram = ucdl::parse("@startuml\nactor User\nUser --> (Login)\n@enduml").unwrap();
//! assert_eq!(diagram.definitions.len(), 2);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax)
// ============================================================================

/// Foundation types: TextRange, LineCol, LineIndex
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, grammar traits
pub mod parser;

/// Syntax: AST types, ParseError
pub mod syntax;

// Re-export the entry points collaborators need
pub use parser::{Lexer, LexerOptions, ParseOptions, Token, parse_tokens, tokenize};
pub use syntax::{Diagram, Definition, ParseError, parse, parse_with};

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};
