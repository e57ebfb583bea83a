//! Abstract syntax tree for use-case diagrams
//!
//! The tree is built bottom-up by the parser and never mutated afterwards.
//! Parents own their children by value; packages nest full definition
//! lists. Names are kept exactly as written: no alias or name resolution
//! happens here.

use smol_str::SmolStr;

// ============================================================================
// NAMES
// ============================================================================

/// How a name was spelled in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NameForm {
    /// `Admin`
    Identifier,
    /// `:Main Admin:`
    ActorText,
    /// `(Use the application)`
    UseCaseText,
    /// `"Main Admin"` (declarations only, never a link endpoint)
    Quoted,
}

/// An entity name or reference, without its delimiters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Name {
    pub text: SmolStr,
    pub form: NameForm,
}

impl Name {
    pub fn new(text: impl Into<SmolStr>, form: NameForm) -> Self {
        Self {
            text: text.into(),
            form,
        }
    }

    pub fn ident(text: impl Into<SmolStr>) -> Self {
        Self::new(text, NameForm::Identifier)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check if this name could also be written as a plain identifier reference
    pub fn is_identifier(&self) -> bool {
        self.form == NameForm::Identifier
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.form {
            NameForm::Identifier => write!(f, "{}", self.text),
            NameForm::ActorText => write!(f, ":{}:", self.text),
            NameForm::UseCaseText => write!(f, "({})", self.text),
            NameForm::Quoted => write!(f, "\"{}\"", self.text),
        }
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

// ============================================================================
// DIAGRAM
// ============================================================================

/// A whole `@startuml` ... `@enduml` diagram
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagram {
    /// Optional identifier after `@startuml`
    pub name: Option<SmolStr>,
    /// Definitions in source order, including blank lines
    pub definitions: Vec<Definition>,
}

impl Diagram {
    /// Top-level definitions, skipping blank lines
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|d| !d.is_empty())
    }

    /// Every definition in the tree, depth first, skipping blank lines
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.definitions)
    }

    /// All actor declarations, at any nesting depth
    pub fn actors(&self) -> impl Iterator<Item = &ActorDef> {
        self.descendants().filter_map(|d| match d {
            Definition::Actor(actor) => Some(actor),
            _ => None,
        })
    }

    /// All use case declarations, at any nesting depth
    pub fn use_cases(&self) -> impl Iterator<Item = &UseCaseDef> {
        self.descendants().filter_map(|d| match d {
            Definition::UseCase(use_case) => Some(use_case),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

// ============================================================================
// DEFINITIONS
// ============================================================================

/// One line (or one package block) of a diagram body
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Definition {
    Actor(ActorDef),
    UseCase(UseCaseDef),
    Package(PackageDef),
    Inheritance(InheritanceLink),
    Association(AssociationLink),
    /// A blank line, kept so line numbers stay reconstructible
    Empty { line: u32 },
}

impl Definition {
    /// 1-based line the definition starts on
    pub fn line(&self) -> u32 {
        match self {
            Self::Actor(d) => d.line,
            Self::UseCase(d) => d.line,
            Self::Package(d) => d.line,
            Self::Inheritance(d) => d.line,
            Self::Association(d) => d.line,
            Self::Empty { line } => *line,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Short name of the variant for logs and diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Actor(_) => "actor",
            Self::UseCase(_) => "usecase",
            Self::Package(_) => "package",
            Self::Inheritance(_) => "inheritance",
            Self::Association(_) => "association",
            Self::Empty { .. } => "empty",
        }
    }
}

/// `actor Name [as Alias] [<<stereotype>>]` or `:Name: [as Alias] [<<stereotype>>]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActorDef {
    pub name: Name,
    pub alias: Option<SmolStr>,
    pub stereotype: Option<SmolStr>,
    pub line: u32,
}

/// `usecase Name [as Alias] [<<stereotype>>]` or `(Name) [as Alias] [<<stereotype>>]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UseCaseDef {
    pub name: Name,
    pub alias: Option<SmolStr>,
    pub stereotype: Option<SmolStr>,
    pub line: u32,
}

/// `package Name { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PackageDef {
    pub name: SmolStr,
    /// Definitions in source order, including blank lines
    pub contents: Vec<Definition>,
    pub line: u32,
}

impl PackageDef {
    /// Direct members, skipping blank lines
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.contents.iter().filter(|d| !d.is_empty())
    }

    /// Direct sub-packages
    pub fn packages(&self) -> impl Iterator<Item = &PackageDef> {
        self.contents.iter().filter_map(|d| match d {
            Definition::Package(package) => Some(package),
            _ => None,
        })
    }
}

/// `Child <|-- Parent`: the arrow points at the parent
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InheritanceLink {
    pub parent: Name,
    pub child: Name,
    pub line: u32,
}

/// Line style of an association arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArrowStyle {
    /// `->`, `-->`, ...
    Solid,
    /// `.>`, `..>`, ...
    Dotted,
}

/// `From --> To [: qualifier]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssociationLink {
    pub from: Name,
    pub to: Name,
    pub arrow: ArrowStyle,
    pub qualifier: Option<Qualifier>,
    pub line: u32,
}

/// What follows the `:` of an association
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Qualifier {
    Extends,
    Includes,
    Label(SmolStr),
}

// ============================================================================
// TRAVERSAL
// ============================================================================

/// Depth-first iterator over a definition list and every nested package
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Definition>>,
}

impl<'a> Descendants<'a> {
    fn new(definitions: &'a [Definition]) -> Self {
        Self {
            stack: vec![definitions.iter()],
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Definition;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Definition::Empty { .. }) => continue,
                Some(def) => {
                    if let Definition::Package(package) = def {
                        self.stack.push(package.contents.iter());
                    }
                    return Some(def);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
