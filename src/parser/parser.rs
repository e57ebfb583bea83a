//! Recursive descent parser for use-case diagrams
//!
//! Builds a [`Diagram`] from a token slice. There is no error recovery:
//! the first violation ends the parse and no partial tree escapes.

use smol_str::SmolStr;
use text_size::TextSize;
use tracing::debug;

use super::ast::Diagram;
use super::errors::{ErrorCode, Found, ParseContext, SyntaxError};
use super::grammar::{self, DiagramParser};
use super::lexer::Token;
use super::options::ParseOptions;
use super::syntax_kind::SyntaxKind;

/// Parse a token sequence with the default options
pub fn parse_tokens(tokens: &[Token<'_>]) -> Result<Diagram, SyntaxError> {
    parse_tokens_with(tokens, &ParseOptions::default())
}

/// Parse a token sequence
pub fn parse_tokens_with(tokens: &[Token<'_>], options: &ParseOptions) -> Result<Diagram, SyntaxError> {
    let mut parser = Parser::new(tokens, *options);
    let result = grammar::parse_diagram(&mut parser);
    match &result {
        Ok(diagram) => debug!(
            "parsed diagram {:?}: {} definitions from {} tokens",
            diagram.name,
            diagram.definitions.len(),
            tokens.len()
        ),
        Err(err) => debug!("parse failed: {}", err),
    }
    result
}

/// The parser state
///
/// Owns the cursor, the context stack and the package depth for one
/// parse; nothing outlives the call.
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    options: ParseOptions,
    contexts: Vec<ParseContext>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>], options: ParseOptions) -> Self {
        Self {
            tokens,
            pos: 0,
            options,
            contexts: Vec::new(),
            depth: 0,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn context(&self) -> ParseContext {
        self.contexts.last().copied().unwrap_or_default()
    }

    /// Line and end offset used when the input runs out
    fn end_position(&self) -> (u32, TextSize) {
        self.tokens
            .last()
            .map(|t| (t.line, t.range.end()))
            .unwrap_or((1, TextSize::new(0)))
    }
}

impl DiagramParser for Parser<'_> {
    fn current_kind(&self) -> Option<SyntaxKind> {
        self.current().map(|t| t.kind)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn current_line(&self) -> u32 {
        self.current()
            .map(|t| t.line)
            .unwrap_or_else(|| self.end_position().0)
    }

    fn peek_kind(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    // =========================================================================
    // Context and nesting
    // =========================================================================

    fn push_context(&mut self, context: ParseContext) {
        self.contexts.push(context);
    }

    fn pop_context(&mut self) {
        self.contexts.pop();
    }

    fn enter_package(&mut self) -> Result<(), SyntaxError> {
        if self.depth >= self.options.max_nesting {
            let limit = self.options.max_nesting;
            return Err(self
                .error(ErrorCode::E0304, "a definition other than 'package'")
                .with_hint(format!("packages may nest at most {} deep", limit)));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave_package(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&self, code: ErrorCode, expected: &str) -> SyntaxError {
        let err = match self.current() {
            Some(token) => SyntaxError::new(
                code,
                expected,
                Found::Token {
                    kind: token.kind,
                    text: SmolStr::new(token.text),
                },
                token.line,
                token.range,
            ),
            None => {
                let (line, offset) = self.end_position();
                SyntaxError::at_end(code, expected, line, offset)
            }
        };
        err.with_context(self.context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;
    use text_size::TextRange;

    #[test]
    fn test_parser_cursor_stops_at_end() {
        let tokens = tokenize("a b").unwrap();
        let mut parser = Parser::new(&tokens, ParseOptions::default());
        assert_eq!(parser.current_kind(), Some(SyntaxKind::IDENT));
        assert_eq!(parser.peek_kind(1), Some(SyntaxKind::IDENT));
        assert_eq!(parser.peek_kind(2), None);
        parser.bump();
        parser.bump();
        parser.bump();
        assert!(parser.at_eof());
        assert_eq!(parser.current_text(), "");
    }

    #[test]
    fn test_error_at_end_points_past_last_token() {
        let tokens = tokenize("@startuml\nactor A").unwrap();
        let mut parser = Parser::new(&tokens, ParseOptions::default());
        while !parser.at_eof() {
            parser.bump();
        }
        let err = parser.error(ErrorCode::E0204, "'@enduml'");
        assert!(err.is_truncated());
        assert_eq!(err.line, 2);
        assert_eq!(err.range, TextRange::empty(TextSize::new(17)));
    }

    #[test]
    fn test_error_carries_innermost_context() {
        let tokens = tokenize("x").unwrap();
        let mut parser = Parser::new(&tokens, ParseOptions::default());
        parser.push_context(ParseContext::PackageBody);
        parser.push_context(ParseContext::Link);
        assert_eq!(parser.error(ErrorCode::E0401, "an arrow").context, ParseContext::Link);
        parser.pop_context();
        assert_eq!(
            parser.error(ErrorCode::E0303, "a definition").context,
            ParseContext::PackageBody
        );
    }

    #[test]
    fn test_nesting_limit() {
        let tokens = tokenize("package").unwrap();
        let mut parser = Parser::new(&tokens, ParseOptions { max_nesting: 1 });
        assert!(parser.enter_package().is_ok());
        let err = parser.enter_package().unwrap_err();
        assert_eq!(err.code, ErrorCode::E0304);
        parser.leave_package();
        assert!(parser.enter_package().is_ok());
    }
}
