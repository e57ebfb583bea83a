//! Lexer and recursive-descent parser for use-case diagrams
//!
//! This module provides a strictly layered front end:
//! - **logos** for fast lexing into line-numbered tokens
//! - a hand-written recursive-descent parser producing an immutable AST
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos + keyword table) → Tokens {kind, text, line, range}
//!     ↓
//! Parser (grammar rules over DiagramParser) → Diagram
//! ```
//!
//! The lexer never sees grammar rules and the parser never sees raw
//! characters. Both fail on the first problem; there is no recovery.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
pub mod grammar;
mod lexer;
mod options;
mod syntax_kind;

pub use ast::*;
pub use errors::{ErrorCode, Found, LexicalError, ParseContext, SyntaxError};
pub use lexer::{
    ColonForm, LexErrorKind, Lexed, Lexer, LogosToken, Token, tokenize, tokenize_with,
};
pub use options::{
    DEFAULT_MAX_NESTING, KeywordTable, LexerOptions, ParseOptions, RESERVED_WORDS,
    UnknownCharPolicy,
};
pub use parser::{Parser, parse_tokens, parse_tokens_with};
pub use syntax_kind::SyntaxKind;
