//! Parser Tests - Associations and Inheritance
//!
//! Tests for `from arrow to [: qualifier]` links and `child <|-- parent`
//! inheritance, with every name-ref form as an endpoint.

use rstest::rstest;
use ucdl::parse;
use ucdl::syntax::{ArrowStyle, AssociationLink, Definition, InheritanceLink, NameForm, Qualifier};

/// Helper to parse a single body line
fn single_definition(body: &str) -> Definition {
    let text = format!("@startuml\n{}\n@enduml", body);
    let diagram = parse(&text).unwrap_or_else(|e| panic!("Parse failed for {:?}: {}", body, e));
    diagram.iter().next().cloned().expect("should have a definition")
}

/// Helper to get the association on a single body line
fn association(body: &str) -> AssociationLink {
    match single_definition(body) {
        Definition::Association(link) => link,
        other => panic!("expected an association, got {:?}", other),
    }
}

/// Helper to get the inheritance on a single body line
fn inheritance(body: &str) -> InheritanceLink {
    match single_definition(body) {
        Definition::Inheritance(link) => link,
        other => panic!("expected an inheritance, got {:?}", other),
    }
}

// ============================================================================
// Associations
// ============================================================================

#[rstest]
#[case("User --> Use", ArrowStyle::Solid)]
#[case("User -> Use", ArrowStyle::Solid)]
#[case("User ..> Use", ArrowStyle::Dotted)]
#[case("User .> Use", ArrowStyle::Dotted)]
fn test_association_arrow(#[case] body: &str, #[case] arrow: ArrowStyle) {
    let link = association(body);
    assert_eq!(link.from, "User");
    assert_eq!(link.to, "Use");
    assert_eq!(link.arrow, arrow);
    assert_eq!(link.qualifier, None);
}

#[rstest]
#[case(":Admin: --> (Login)", NameForm::ActorText, NameForm::UseCaseText)]
#[case("(Start) .> Use", NameForm::UseCaseText, NameForm::Identifier)]
#[case("Admin --> :Guest:", NameForm::Identifier, NameForm::ActorText)]
#[case(":A: --> (:B)", NameForm::ActorText, NameForm::UseCaseText)]
fn test_association_endpoint_forms(
    #[case] body: &str,
    #[case] from: NameForm,
    #[case] to: NameForm,
) {
    let link = association(body);
    assert_eq!(link.from.form, from);
    assert_eq!(link.to.form, to);
}

#[rstest]
#[case("(Start) .> Use : extends", Qualifier::Extends)]
#[case("Checkout ..> Pay : includes", Qualifier::Includes)]
#[case("User --> Login : uses", Qualifier::Label("uses".into()))]
#[case("A --> B :extends", Qualifier::Extends)]
#[case("A --> B :Label_2", Qualifier::Label("Label_2".into()))]
#[case("(A) --> B :extends", Qualifier::Extends)]
#[case("A --> B:includes", Qualifier::Includes)]
fn test_association_qualifier(#[case] body: &str, #[case] qualifier: Qualifier) {
    assert_eq!(association(body).qualifier, Some(qualifier));
}

#[test]
fn test_literal_endpoints_keep_inner_delimiters() {
    let link = association(":A: --> (:B)");
    assert_eq!(link.from, "A");
    assert_eq!(link.to, ":B");
    assert_eq!(link.qualifier, None);
}

#[test]
fn test_qualified_link_from_use_case_text() {
    let link = association("(A) --> B :extends");
    assert_eq!(link.from, "A");
    assert_eq!(link.from.form, NameForm::UseCaseText);
    assert_eq!(link.qualifier, Some(Qualifier::Extends));
}

// ============================================================================
// Inheritance
// ============================================================================

#[test]
fn test_inheritance_target_is_parent() {
    let link = inheritance("User <|-- Admin");
    assert_eq!(link.parent, "Admin");
    assert_eq!(link.child, "User");
}

#[test]
fn test_inheritance_with_literals() {
    let link = inheritance(":Guest: <|-- (Member)");
    assert_eq!(link.child.form, NameForm::ActorText);
    assert_eq!(link.parent.form, NameForm::UseCaseText);
    assert_eq!(link.parent, "Member");
}

#[test]
fn test_literal_before_arrow_is_a_reference_not_a_declaration() {
    let text = "@startuml\n(Pay) --> Bank\n:Clerk: <|-- Staff\n@enduml";
    let diagram = parse(text).unwrap();
    let kinds: Vec<_> = diagram.iter().map(|d| d.kind_name()).collect();
    assert_eq!(kinds, vec!["association", "inheritance"]);
    assert_eq!(diagram.use_cases().count(), 0);
    assert_eq!(diagram.actors().count(), 0);
}

// ============================================================================
// Full Diagram
// ============================================================================

#[test]
fn test_reference_diagram() {
    let text = "@startuml
:Main Admin: as Admin <<Not-a-machine>>
(Use the application) as Use
User <|-- Admin
(Start) .> Use : extends
User .> Use
@enduml";
    let diagram = parse(text).unwrap();
    assert_eq!(diagram.name, None);
    assert_eq!(diagram.definitions.len(), 5);

    let Definition::Actor(actor) = &diagram.definitions[0] else {
        panic!("expected an actor");
    };
    assert_eq!(actor.name, "Main Admin");
    assert_eq!(actor.alias.as_deref(), Some("Admin"));
    assert_eq!(actor.stereotype.as_deref(), Some("Not-a-machine"));

    let Definition::UseCase(use_case) = &diagram.definitions[1] else {
        panic!("expected a use case");
    };
    assert_eq!(use_case.name, "Use the application");
    assert_eq!(use_case.alias.as_deref(), Some("Use"));
    assert_eq!(use_case.stereotype, None);

    let Definition::Inheritance(link) = &diagram.definitions[2] else {
        panic!("expected an inheritance");
    };
    assert_eq!(link.parent, "Admin");
    assert_eq!(link.child, "User");

    let Definition::Association(link) = &diagram.definitions[3] else {
        panic!("expected an association");
    };
    assert_eq!(link.from, "Start");
    assert_eq!(link.to, "Use");
    assert_eq!(link.qualifier, Some(Qualifier::Extends));

    let Definition::Association(link) = &diagram.definitions[4] else {
        panic!("expected an association");
    };
    assert_eq!(link.from, "User");
    assert_eq!(link.to, "Use");
    assert_eq!(link.qualifier, None);
    assert_eq!(link.line, 6);
}
