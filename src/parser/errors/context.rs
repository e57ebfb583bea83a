//! Parse context tracking for context-aware error messages
//!
//! The parser keeps a stack of contexts so a failure can say where in the
//! diagram structure it happened.

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// Outside any definition (markers, diagram body)
    #[default]
    TopLevel,
    /// Inside a package body
    PackageBody,
    /// Parsing an actor declaration
    ActorDeclaration,
    /// Parsing a use case declaration
    UseCaseDeclaration,
    /// Parsing a package header
    PackageDeclaration,
    /// Parsing an association link
    Link,
    /// Parsing an inheritance link
    Inheritance,
    /// Parsing the qualifier after a link
    Qualifier,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::PackageBody => "in package body",
            Self::ActorDeclaration => "in actor declaration",
            Self::UseCaseDeclaration => "in use case declaration",
            Self::PackageDeclaration => "in package declaration",
            Self::Link => "in link",
            Self::Inheritance => "in inheritance",
            Self::Qualifier => "in link qualifier",
        }
    }

    /// Get a description of what is expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel | Self::PackageBody => {
                "a definition (actor, usecase, package, link or inheritance)"
            }
            Self::ActorDeclaration => "an actor name, alias or stereotype",
            Self::UseCaseDeclaration => "a use case name, alias or stereotype",
            Self::PackageDeclaration => "a package name followed by '{'",
            Self::Link => "an arrow and a target",
            Self::Inheritance => "a parent name",
            Self::Qualifier => "'extends', 'includes' or a label",
        }
    }
}
