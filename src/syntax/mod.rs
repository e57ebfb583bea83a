//! Text-level entry points and the AST they produce
//!
//! [`parse`] runs the lexer and the parser in one call and folds both of
//! their failure types into [`ParseError`].

mod parser;

pub use crate::parser::ast::{
    ActorDef, ArrowStyle, AssociationLink, Definition, Descendants, Diagram, InheritanceLink,
    Name, NameForm, PackageDef, Qualifier, UseCaseDef,
};
pub use parser::{ParseError, parse, parse_with};
