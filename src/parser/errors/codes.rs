//! Error code definitions for diagram diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (no token pattern matches)
//! - E02xx: Structural errors (markers, line ends, braces)
//! - E03xx: Declaration errors (actors, use cases, packages)
//! - E04xx: Link errors (arrows, endpoints, qualifiers)

use std::fmt;

/// Error codes for lexer and parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character that starts no token
    E0101,
    /// Unterminated actor text, use case text, string or stereotype
    E0102,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Missing end of line after a definition or marker
    E0201,
    /// Unclosed package brace `{`
    E0202,
    /// Missing `@startuml`
    E0203,
    /// Missing `@enduml`
    E0204,
    /// Input after `@enduml`
    E0205,
    /// Missing `{` after a package name
    E0206,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing entity or package name
    E0301,
    /// Missing identifier after `as`
    E0302,
    /// Token that cannot start a definition
    E0303,
    /// Package nesting deeper than the configured limit
    E0304,

    // =========================================================================
    // E04xx: Link errors
    // =========================================================================
    /// Missing arrow after a link source
    E0401,
    /// Missing link target
    E0402,
    /// Invalid qualifier after `:`
    E0403,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "lexical error",
            Self::E0201
            | Self::E0202
            | Self::E0203
            | Self::E0204
            | Self::E0205
            | Self::E0206 => "structural error",
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 => "declaration error",
            Self::E0401 | Self::E0402 | Self::E0403 => "link error",
        }
    }

    /// Get the default message for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unexpected character",
            Self::E0102 => "unterminated literal",
            Self::E0201 => "missing end of line",
            Self::E0202 => "unclosed package brace",
            Self::E0203 => "missing '@startuml'",
            Self::E0204 => "missing '@enduml'",
            Self::E0205 => "unexpected input after '@enduml'",
            Self::E0206 => "missing package body",
            Self::E0301 => "missing name",
            Self::E0302 => "missing alias",
            Self::E0303 => "unexpected token at start of definition",
            Self::E0304 => "packages nested too deeply",
            Self::E0401 => "missing arrow",
            Self::E0402 => "missing link target",
            Self::E0403 => "invalid qualifier",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
