//! Syntax-level parsing interface.
//!
//! Runs the lexer and the parser back to back: text in, [`Diagram`] out.

use thiserror::Error;
use tracing::warn;

use crate::base::TextRange;
use crate::parser::{
    Diagram, ErrorCode, LexerOptions, LexicalError, ParseOptions, SyntaxError, parse_tokens_with,
    tokenize_with,
};

/// Either phase of a text-to-AST parse failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No token pattern matched
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    /// The tokens do not form a diagram
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// 1-based line of the failure
    pub fn line(&self) -> u32 {
        match self {
            Self::Lexical(err) => err.line,
            Self::Syntax(err) => err.line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Lexical(err) => err.code,
            Self::Syntax(err) => err.code,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::Lexical(err) => err.range,
            Self::Syntax(err) => err.range,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::Lexical(_))
    }

    /// Check if the input ended before the diagram did
    ///
    /// Only the parser can tell: an unclosed literal is a malformed line
    /// wherever it sits, so lexical errors never count as truncation.
    pub fn is_truncated(&self) -> bool {
        match self {
            Self::Lexical(_) => false,
            Self::Syntax(err) => err.is_truncated(),
        }
    }

    /// Format the error for display, including any hint
    pub fn format(&self) -> String {
        match self {
            Self::Lexical(err) => err.to_string(),
            Self::Syntax(err) => err.format(),
        }
    }
}

/// Parse diagram text with the default options
pub fn parse(text: &str) -> Result<Diagram, ParseError> {
    parse_with(text, &LexerOptions::default(), &ParseOptions::default())
}

/// Parse diagram text with explicit lexer and parser options
///
/// Under the lenient lexer policy skipped characters are logged at `warn`
/// and otherwise dropped; call [`tokenize_with`] directly to inspect them.
pub fn parse_with(
    text: &str,
    lexer: &LexerOptions,
    parser: &ParseOptions,
) -> Result<Diagram, ParseError> {
    let lexed = tokenize_with(text, lexer)?;
    if !lexed.is_clean() {
        warn!("parsing with {} skipped characters", lexed.skipped.len());
    }
    Ok(parse_tokens_with(&lexed.tokens, parser)?)
}
