//! Parser Tests - Diagrams, Actors and Use Cases
//!
//! Tests for diagram markers and entity declarations in both the keyword
//! form (`actor Foo`) and the literal form (`:Foo:`, `(Foo)`).

use rstest::rstest;
use ucdl::parse;
use ucdl::syntax::{ActorDef, Definition, Diagram, NameForm, UseCaseDef};

/// Helper to wrap body lines in diagram markers and parse them
fn parse_body(body: &str) -> Diagram {
    let text = format!("@startuml\n{}\n@enduml", body);
    parse(&text).unwrap_or_else(|e| panic!("Parse failed for {:?}: {}", body, e))
}

/// Helper to get the only actor declared in a one-line body
fn single_actor(body: &str) -> ActorDef {
    match parse_body(body).iter().next() {
        Some(Definition::Actor(actor)) => actor.clone(),
        other => panic!("expected an actor, got {:?}", other),
    }
}

/// Helper to get the only use case declared in a one-line body
fn single_use_case(body: &str) -> UseCaseDef {
    match parse_body(body).iter().next() {
        Some(Definition::UseCase(use_case)) => use_case.clone(),
        other => panic!("expected a use case, got {:?}", other),
    }
}

// ============================================================================
// Diagram Markers
// ============================================================================

#[test]
fn test_empty_diagram() {
    let diagram = parse("@startuml\n@enduml").unwrap();
    assert_eq!(diagram, Diagram::default());
    assert!(diagram.is_empty());
}

#[rstest]
#[case("@startuml Demo\n@enduml", Some("Demo"))]
#[case("@startuml\n@enduml", None)]
#[case("\n\n@startuml Login_Flow\n@enduml\n\n", Some("Login_Flow"))]
fn test_diagram_name(#[case] input: &str, #[case] expected: Option<&str>) {
    let diagram = parse(input).unwrap();
    assert_eq!(diagram.name.as_deref(), expected);
}

#[test]
fn test_blank_line_is_kept_but_skipped_by_iteration() {
    let diagram = parse("@startuml\n  \nactor A\n@enduml").unwrap();
    assert_eq!(diagram.definitions.len(), 2);
    assert_eq!(diagram.definitions[0], Definition::Empty { line: 2 });
    assert_eq!(diagram.definitions[1].line(), 3);
    assert_eq!(diagram.iter().count(), 1);
}

#[test]
fn test_definitions_keep_source_order() {
    let diagram = parse_body("actor B\nusecase U\nactor A");
    let kinds: Vec<_> = diagram.iter().map(|d| d.kind_name()).collect();
    assert_eq!(kinds, vec!["actor", "usecase", "actor"]);
    let lines: Vec<_> = diagram.iter().map(|d| d.line()).collect();
    assert_eq!(lines, vec![2, 3, 4]);
}

// ============================================================================
// Actors
// ============================================================================

#[rstest]
#[case("actor User", "User", NameForm::Identifier)]
#[case("actor :Main Admin:", "Main Admin", NameForm::ActorText)]
#[case("actor \"Main Admin\"", "Main Admin", NameForm::Quoted)]
#[case("actor (Robot)", "Robot", NameForm::UseCaseText)]
#[case(":Main Admin:", "Main Admin", NameForm::ActorText)]
fn test_actor_name(#[case] body: &str, #[case] name: &str, #[case] form: NameForm) {
    let actor = single_actor(body);
    assert_eq!(actor.name, name);
    assert_eq!(actor.name.form, form);
    assert_eq!(actor.alias, None);
    assert_eq!(actor.stereotype, None);
}

#[rstest]
#[case("actor User as U", Some("U"), None)]
#[case("actor User <<Human>>", None, Some("Human"))]
#[case("actor User as U <<Human>>", Some("U"), Some("Human"))]
#[case(":Main Admin: as Admin <<Not-a-machine>>", Some("Admin"), Some("Not-a-machine"))]
fn test_actor_alias_and_stereotype(
    #[case] body: &str,
    #[case] alias: Option<&str>,
    #[case] stereotype: Option<&str>,
) {
    let actor = single_actor(body);
    assert_eq!(actor.alias.as_deref(), alias);
    assert_eq!(actor.stereotype.as_deref(), stereotype);
}

#[test]
fn test_keywords_only_reserved_in_exact_spelling() {
    let actor = single_actor("actor Actor as Package");
    assert_eq!(actor.name, "Actor");
    assert_eq!(actor.alias.as_deref(), Some("Package"));
}

// ============================================================================
// Use Cases
// ============================================================================

#[rstest]
#[case("usecase Login", "Login", NameForm::Identifier)]
#[case("usecase (Use the application)", "Use the application", NameForm::UseCaseText)]
#[case("usecase \"Check out\"", "Check out", NameForm::Quoted)]
#[case("(Use the application)", "Use the application", NameForm::UseCaseText)]
fn test_use_case_name(#[case] body: &str, #[case] name: &str, #[case] form: NameForm) {
    let use_case = single_use_case(body);
    assert_eq!(use_case.name, name);
    assert_eq!(use_case.name.form, form);
}

#[rstest]
#[case("(Use the application) as Use", Some("Use"), None)]
#[case("usecase Login as L <<Core>>", Some("L"), Some("Core"))]
#[case("(Pay) <<Billing>>", None, Some("Billing"))]
fn test_use_case_alias_and_stereotype(
    #[case] body: &str,
    #[case] alias: Option<&str>,
    #[case] stereotype: Option<&str>,
) {
    let use_case = single_use_case(body);
    assert_eq!(use_case.alias.as_deref(), alias);
    assert_eq!(use_case.stereotype.as_deref(), stereotype);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_actor_and_use_case_queries() {
    let diagram = parse_body("actor A\n(U1)\npackage P {\nactor B\nusecase U2\n}\nA --> (U1)");
    let actors: Vec<_> = diagram.actors().map(|a| a.name.as_str()).collect();
    assert_eq!(actors, vec!["A", "B"]);
    let use_cases: Vec<_> = diagram.use_cases().map(|u| u.name.as_str()).collect();
    assert_eq!(use_cases, vec!["U1", "U2"]);
}
