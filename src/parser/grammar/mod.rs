//! Grammar rules for the use-case diagram language
//!
//! ```text
//! diagram         := EOL* "@startuml" name? EOL definition_list "@enduml" EOL*
//! definition_list := (definition EOL)*
//! definition      := actor_def | usecase_def | link | inheritance | package_def | ε
//! ```
//!
//! - `diagram` - markers, the definition list, and the definition dispatch
//! - `declarations` - actors, use cases, packages
//! - `links` - associations, inheritance, qualifiers
//!
//! The rule functions are generic over [`DiagramParser`] so they only see
//! tokens, never source text.

mod declarations;
mod diagram;
mod links;

pub(super) use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
pub(super) use crate::parser::syntax_kind::SyntaxKind;
pub(super) use crate::parser::ast::*;
pub(super) use smol_str::SmolStr;

pub use self::declarations::*;
pub use self::diagram::*;
pub use self::links::*;

/// Trait for grammar operations
///
/// This trait defines the interface between the grammar rules and the
/// parser. The parser owns the token cursor, the context stack and the
/// nesting counter; rules only inspect and consume.
pub trait DiagramParser {
    // Token inspection
    fn current_kind(&self) -> Option<SyntaxKind>;
    fn current_text(&self) -> &str;
    fn current_line(&self) -> u32;

    /// Peek at the kind of the nth token ahead (0 is the current token)
    fn peek_kind(&self, n: usize) -> Option<SyntaxKind>;

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn at_eof(&self) -> bool {
        self.current_kind().is_none()
    }

    // Token consumption
    fn bump(&mut self);

    /// Consume the current token and return its text
    fn bump_text(&mut self) -> SmolStr {
        let text = SmolStr::new(self.current_text());
        self.bump();
        text
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    // Context tracking
    fn push_context(&mut self, context: ParseContext);
    fn pop_context(&mut self);

    // Package nesting
    fn enter_package(&mut self) -> Result<(), SyntaxError>;
    fn leave_package(&mut self);

    /// Build an error at the current token in the current context
    fn error(&self, code: ErrorCode, expected: &str) -> SyntaxError;
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Run a rule inside a context, popping it again on success or failure
pub(super) fn in_context<P, T>(
    p: &mut P,
    context: ParseContext,
    rule: impl FnOnce(&mut P) -> Result<T, SyntaxError>,
) -> Result<T, SyntaxError>
where
    P: DiagramParser + ?Sized,
{
    p.push_context(context);
    let result = rule(p);
    p.pop_context();
    result
}

/// Consume the end-of-line token that terminates a marker or definition
pub fn expect_eol<P: DiagramParser + ?Sized>(p: &mut P) -> Result<(), SyntaxError> {
    if p.eat(SyntaxKind::EOL) {
        Ok(())
    } else {
        let err = p.error(ErrorCode::E0201, "end of line");
        if matches!(p.current_kind(), Some(SyntaxKind::R_BRACE)) {
            Err(err.with_hint("put the closing '}' on its own line"))
        } else {
            Err(err.with_hint("put each definition on its own line"))
        }
    }
}
