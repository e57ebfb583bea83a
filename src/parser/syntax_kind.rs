//! Token kinds for the use-case diagram language
//!
//! The diagram grammar is line oriented, so unlike most languages the
//! newline is a real token (`EOL`) rather than trivia.

/// All token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // MARKERS
    // =========================================================================
    START_UML,          // @startuml
    END_UML,            // @enduml
    EOL,                // one or more newlines

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // identifier
    STRING,             // "quoted"
    STEREOTYPE,         // <<stereotype>>
    ACTOR_TEXT,         // :Actor name:
    USE_CASE_TEXT,      // (Use case name)

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    COLON,              // :
    L_BRACE,            // {
    R_BRACE,            // }
    SOLID_ARROW,        // -->
    DOTTED_ARROW,       // ..>
    INHERIT_ARROW,      // <|--

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ACTOR_KW,
    USECASE_KW,
    PACKAGE_KW,
    AS_KW,
    INCLUDES_KW,
    EXTENDS_KW,
}

impl SyntaxKind {
    /// Check if this is a reserved word
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ACTOR_KW as u16) && (self as u16) <= (Self::EXTENDS_KW as u16)
    }

    /// Check if this is a literal (its text is a value, not a spelling)
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IDENT | Self::STRING | Self::STEREOTYPE | Self::ACTOR_TEXT | Self::USE_CASE_TEXT
        )
    }

    /// Association arrows (`-->`, `..>`); the inheritance arrow is not one
    pub fn is_link_arrow(self) -> bool {
        matches!(self, Self::SOLID_ARROW | Self::DOTTED_ARROW)
    }

    /// Tokens that can name an entity at a link or inheritance endpoint
    pub fn is_name_ref(self) -> bool {
        matches!(self, Self::IDENT | Self::ACTOR_TEXT | Self::USE_CASE_TEXT)
    }

    /// Human-readable name used in diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::START_UML => "'@startuml'",
            Self::END_UML => "'@enduml'",
            Self::EOL => "end of line",
            Self::IDENT => "identifier",
            Self::STRING => "string",
            Self::STEREOTYPE => "stereotype",
            Self::ACTOR_TEXT => "actor text",
            Self::USE_CASE_TEXT => "use case text",
            Self::COLON => "':'",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::SOLID_ARROW => "solid arrow",
            Self::DOTTED_ARROW => "dotted arrow",
            Self::INHERIT_ARROW => "'<|--'",
            Self::ACTOR_KW => "'actor'",
            Self::USECASE_KW => "'usecase'",
            Self::PACKAGE_KW => "'package'",
            Self::AS_KW => "'as'",
            Self::INCLUDES_KW => "'includes'",
            Self::EXTENDS_KW => "'extends'",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
