//! Logos-based lexer for use-case diagrams
//!
//! Token patterns, in priority order:
//!
//! ```text
//! @startuml @enduml            markers
//! "text"                       string (no escapes, single line)
//! <<text>>                     stereotype (ends at the first `>>`)
//! <|--                         inheritance arrow
//! :text:                       actor text (scanned by the colon callback)
//! (text)                       use case text
//! -->  ..>                     solid / dotted arrow (one or more `-` / `.`)
//! :  {  }                      punctuation
//! name                         identifier, refined through the keyword table
//! \n\n...                      one EOL per run of newlines
//! ```
//!
//! Spaces, tabs and carriage returns are skipped. Actor text and the plain
//! colon share their first character, so both come from one `:` token whose
//! callback looks ahead for the closing colon on the same line. Without one,
//! a `:` at the start of a line is an unterminated literal and any other
//! `:` is punctuation.

use logos::Logos;
use text_size::{TextRange, TextSize};
use tracing::{debug, trace, warn};

use super::errors::{ErrorCode, LexicalError};
use super::options::{LexerOptions, UnknownCharPolicy};
use super::syntax_kind::SyntaxKind;

/// A token with its kind, text, line and position
///
/// For literal kinds `text` is the value between the delimiters; `range`
/// always covers the full source slice including delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub line: u32,
    pub range: TextRange,
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SyntaxKind::EOL => write!(f, "{:>4}  {:?}", self.line, self.kind),
            _ => write!(f, "{:>4}  {:?} {:?}", self.line, self.kind, self.text),
        }
    }
}

/// Lexer wrapping the logos-generated tokenizer
///
/// Yields one item per token or per rejected input. The line counter is
/// owned by the instance, so lexers over different inputs never interact.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    options: LexerOptions,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, LexerOptions::default())
    }

    pub fn with_options(input: &'a str, options: LexerOptions) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            options,
            line: 1,
        }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Line the next token will start on
    pub fn line(&self) -> u32 {
        self.line
    }

    fn advance_lines(&mut self, text: &str) {
        self.line += text.bytes().filter(|b| *b == b'\n').count() as u32;
    }

    fn error(&mut self, kind: LexErrorKind, range: TextRange) -> LexicalError {
        let slice = self.inner.slice();
        let rest = &self.inner.source()[usize::from(range.start())..];
        let character = rest.chars().next().unwrap_or('\0');
        let code = match kind {
            LexErrorKind::UnterminatedLiteral => ErrorCode::E0102,
            LexErrorKind::UnexpectedCharacter if opens_literal(rest) => ErrorCode::E0102,
            LexErrorKind::UnexpectedCharacter => ErrorCode::E0101,
        };
        let err = LexicalError::new(character, self.line, range, code);
        self.advance_lines(slice);
        err
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let span = self.inner.span();
        let range = TextRange::new(TextSize::new(span.start as u32), TextSize::new(span.end as u32));

        let logos_token = match logos_token {
            Ok(t) => t,
            Err(kind) => return Some(Err(self.error(kind, range))),
        };

        let slice = self.inner.slice();
        let (kind, text) = match logos_token {
            LogosToken::Ident => (self.options.keywords.classify(slice), slice),
            LogosToken::QuotedString
            | LogosToken::UseCaseText
            | LogosToken::Colon(ColonForm::ActorText) => {
                (logos_token.into(), &slice[1..slice.len() - 1])
            }
            LogosToken::Stereotype => (SyntaxKind::STEREOTYPE, &slice[2..slice.len() - 2]),
            other => (other.into(), slice),
        };

        let token = Token {
            kind,
            text,
            line: self.line,
            range,
        };
        trace!("lexed {:?} {:?} at line {}", token.kind, token.text, token.line);

        if kind == SyntaxKind::EOL {
            self.advance_lines(slice);
        }
        Some(Ok(token))
    }
}

/// Result of a tokenize call that ran to the end of its input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    /// Input skipped under [`UnknownCharPolicy::Skip`] (always empty under `Fail`)
    ///
    /// Each entry covers one rejected span. An unterminated literal is
    /// dropped up to the point where its pattern failed, so `"abc` at the
    /// end of a line is a single entry whose `range` covers all four bytes;
    /// `character` only names the first of them.
    pub skipped: Vec<LexicalError>,
}

impl Lexed<'_> {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Tokenize an entire string with the default options
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexicalError> {
    tokenize_with(input, &LexerOptions::default()).map(|lexed| lexed.tokens)
}

/// Tokenize an entire string, applying the configured unknown-character policy
pub fn tokenize_with<'a>(input: &'a str, options: &LexerOptions) -> Result<Lexed<'a>, LexicalError> {
    let mut lexed = Lexed::default();
    let mut lexer = Lexer::with_options(input, options.clone());

    while let Some(item) = lexer.next() {
        match item {
            Ok(token) => lexed.tokens.push(token),
            Err(err) => match lexer.options().on_unknown {
                UnknownCharPolicy::Fail => {
                    debug!("tokenize failed: {}", err);
                    return Err(err);
                }
                UnknownCharPolicy::Skip => {
                    warn!(
                        "skipping {:?} at line {} ({})",
                        &input[err.range], err.line, err.code
                    );
                    lexed.skipped.push(err);
                }
            },
        }
    }

    debug!(
        "tokenized {} bytes into {} tokens ({} skipped)",
        input.len(),
        lexed.tokens.len(),
        lexed.skipped.len()
    );
    Ok(lexed)
}

/// First character allowed inside actor text
fn starts_actor_text(c: char) -> bool {
    !matches!(c, ' ' | ':' | '\n')
}

/// First character allowed inside use case text
fn starts_use_case_text(c: char) -> bool {
    !matches!(c, ' ' | '(' | '\n')
}

/// Check if rejected input begins with the opener of a literal that never closed
fn opens_literal(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some('"') => true,
        Some('<') => chars.next() == Some('<'),
        Some('(') => chars.next().is_some_and(starts_use_case_text),
        _ => false,
    }
}

/// Why the logos tokenizer rejected its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    UnexpectedCharacter,
    UnterminatedLiteral,
}

/// What a `:` turned out to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColonForm {
    /// Plain punctuation in front of a qualifier
    Plain,
    /// `:text:`, closed on the same line
    ActorText,
}

/// Scan ahead from a `:` for the colon that closes actor text
///
/// A colon that opens a line in front of a name but never closes is an
/// unterminated literal. Elsewhere it introduces a qualifier, so
/// `B :extends` stays `COLON EXTENDS_KW`.
fn colon(lex: &mut logos::Lexer<LogosToken>) -> Result<ColonForm, LexErrorKind> {
    let rest = lex.remainder();
    if !rest.chars().next().is_some_and(starts_actor_text) {
        return Ok(ColonForm::Plain);
    }
    if let Some(end) = rest.find([':', '\n']).filter(|&end| rest[end..].starts_with(':')) {
        lex.bump(end + 1);
        return Ok(ColonForm::ActorText);
    }

    let before = &lex.source()[..lex.span().start];
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    if before[line_start..].trim().is_empty() {
        Err(LexErrorKind::UnterminatedLiteral)
    } else {
        Ok(ColonForm::Plain)
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r]+")]
pub enum LogosToken {
    // =========================================================================
    // MARKERS
    // =========================================================================
    #[token("@startuml")]
    StartUml,

    #[token("@enduml")]
    EndUml,

    // =========================================================================
    // DELIMITED LITERALS
    // =========================================================================
    #[regex(r#""[^"\n]*""#)]
    QuotedString,

    #[regex(r"<<([^>\n]|>[^>\n])+>>")]
    Stereotype,

    #[token("<|--")]
    InheritArrow,

    #[regex(r"\([^ (\n][^)\n]*\)")]
    UseCaseText,

    // =========================================================================
    // ARROWS
    // =========================================================================
    #[regex(r"-+>")]
    SolidArrow,

    #[regex(r"\.+>")]
    DottedArrow,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    /// `:` or a whole `:actor text:`
    #[token(":", colon)]
    Colon(ColonForm),

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    // =========================================================================
    // WORDS AND LINES
    // =========================================================================
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"\n+")]
    Eol,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            StartUml => SyntaxKind::START_UML,
            EndUml => SyntaxKind::END_UML,
            QuotedString => SyntaxKind::STRING,
            Stereotype => SyntaxKind::STEREOTYPE,
            InheritArrow => SyntaxKind::INHERIT_ARROW,
            UseCaseText => SyntaxKind::USE_CASE_TEXT,
            SolidArrow => SyntaxKind::SOLID_ARROW,
            DottedArrow => SyntaxKind::DOTTED_ARROW,
            Colon(ColonForm::Plain) => SyntaxKind::COLON,
            Colon(ColonForm::ActorText) => SyntaxKind::ACTOR_TEXT,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            Ident => SyntaxKind::IDENT,
            Eol => SyntaxKind::EOL,
        }
    }
}
