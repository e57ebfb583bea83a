//! Lexical and syntax error types
//!
//! Both carry a 1-based line, a byte range, and a categorized
//! [`ErrorCode`]. Neither is ever downgraded to a warning: the first one
//! raised ends the tokenize or parse call.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;
use super::context::ParseContext;
use crate::parser::SyntaxKind;

/// No token pattern matched at the current scan position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: line {line}: {} {character:?}", .code.default_message())]
pub struct LexicalError {
    /// The first character that could not be tokenized
    pub character: char,
    /// 1-based source line
    pub line: u32,
    /// Source range of the rejected input
    pub range: TextRange,
    /// `E0101` (unexpected character) or `E0102` (unterminated literal)
    pub code: ErrorCode,
}

impl LexicalError {
    pub fn new(character: char, line: u32, range: TextRange, code: ErrorCode) -> Self {
        Self {
            character,
            line,
            range,
            code,
        }
    }

    /// Check if the input stopped in the middle of a literal
    pub fn is_unterminated(&self) -> bool {
        self.code == ErrorCode::E0102
    }
}

/// What the parser was looking at when it failed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Found {
    /// A token that does not fit the grammar here
    Token { kind: SyntaxKind, text: SmolStr },
    /// The token stream ran out
    EndOfInput,
}

impl Found {
    pub fn kind(&self) -> Option<SyntaxKind> {
        match self {
            Self::Token { kind, .. } => Some(*kind),
            Self::EndOfInput => None,
        }
    }
}

impl std::fmt::Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token { kind, text } if kind.is_literal() => {
                write!(f, "{} '{}'", kind.display_name(), text)
            }
            Self::Token { kind, .. } => f.write_str(kind.display_name()),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// The token stream does not match the grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: line {line}: expected {expected} {}, found {found}", .context.description())]
pub struct SyntaxError {
    /// 1-based source line of the offending token (or of the last token)
    pub line: u32,
    /// The offending token, or end of input
    pub found: Found,
    /// Description of what the grammar allows here
    pub expected: String,
    /// Categorized error code
    pub code: ErrorCode,
    /// Innermost grammar context at the failure
    pub context: ParseContext,
    /// Source range of the offending token (empty at end of input)
    pub range: TextRange,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl SyntaxError {
    /// Create a syntax error with minimal information
    pub fn new(
        code: ErrorCode,
        expected: impl Into<String>,
        found: Found,
        line: u32,
        range: TextRange,
    ) -> Self {
        Self {
            line,
            found,
            expected: expected.into(),
            code,
            context: ParseContext::TopLevel,
            range,
            hint: None,
        }
    }

    /// Create an end-of-input error at a specific offset
    pub fn at_end(code: ErrorCode, expected: impl Into<String>, line: u32, offset: TextSize) -> Self {
        Self::new(code, expected, Found::EndOfInput, line, TextRange::empty(offset))
    }

    /// Set the grammar context
    pub fn with_context(mut self, context: ParseContext) -> Self {
        self.context = context;
        self
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check if the diagram was cut short rather than malformed
    pub fn is_truncated(&self) -> bool {
        self.found == Found::EndOfInput
    }

    /// Check if this error has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Format the error for display, including the hint
    pub fn format(&self) -> String {
        let mut result = self.to_string();
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}
