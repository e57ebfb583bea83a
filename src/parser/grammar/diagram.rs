use super::*;
use tracing::trace;

/// Parse a complete diagram
///
/// diagram := EOL* "@startuml" name? EOL definition_list "@enduml" EOL*
pub fn parse_diagram<P: DiagramParser + ?Sized>(p: &mut P) -> Result<Diagram, SyntaxError> {
    while p.eat(SyntaxKind::EOL) {}

    if !p.eat(SyntaxKind::START_UML) {
        return Err(p
            .error(ErrorCode::E0203, "'@startuml'")
            .with_hint("a diagram starts with '@startuml' on its own line"));
    }

    // name := IDENTIFIER | ε
    let name = if p.at(SyntaxKind::IDENT) {
        Some(p.bump_text())
    } else {
        None
    };
    expect_eol(p)?;

    let definitions = parse_definition_list(p)?;

    if !p.eat(SyntaxKind::END_UML) {
        let err = p.error(ErrorCode::E0204, "'@enduml'");
        return Err(if p.at(SyntaxKind::R_BRACE) {
            err.with_hint("this '}' does not close any package")
        } else {
            err.with_hint("close the diagram with '@enduml'")
        });
    }

    while p.eat(SyntaxKind::EOL) {}

    if !p.at_eof() {
        return Err(p.error(ErrorCode::E0205, "end of input"));
    }

    Ok(Diagram { name, definitions })
}

/// Parse definitions up to (not including) `@enduml`, `}` or end of input
///
/// definition_list := (definition EOL)*
pub fn parse_definition_list<P: DiagramParser + ?Sized>(
    p: &mut P,
) -> Result<Vec<Definition>, SyntaxError> {
    let mut definitions = Vec::new();

    while !p.at_eof() && !p.at(SyntaxKind::END_UML) && !p.at(SyntaxKind::R_BRACE) {
        let definition = parse_definition(p)?;
        trace!("{} definition at line {}", definition.kind_name(), definition.line());
        expect_eol(p)?;
        definitions.push(definition);
    }

    Ok(definitions)
}

/// Parse one definition; leaves the terminating EOL in place
///
/// definition := actor_def | usecase_def | link | inheritance | package_def | ε
pub fn parse_definition<P: DiagramParser + ?Sized>(p: &mut P) -> Result<Definition, SyntaxError> {
    let line = p.current_line();

    match p.current_kind() {
        Some(SyntaxKind::EOL) => Ok(Definition::Empty { line }),
        Some(SyntaxKind::ACTOR_KW) => parse_actor_def(p).map(Definition::Actor),
        Some(SyntaxKind::USECASE_KW) => parse_usecase_def(p).map(Definition::UseCase),
        Some(SyntaxKind::PACKAGE_KW) => parse_package_def(p).map(Definition::Package),
        // A literal opens a declaration unless an arrow follows it
        Some(SyntaxKind::ACTOR_TEXT | SyntaxKind::USE_CASE_TEXT) if at_relationship(p) => {
            parse_relationship(p)
        }
        Some(SyntaxKind::ACTOR_TEXT) => parse_actor_literal_def(p).map(Definition::Actor),
        Some(SyntaxKind::USE_CASE_TEXT) => parse_usecase_literal_def(p).map(Definition::UseCase),
        Some(SyntaxKind::IDENT) => parse_relationship(p),
        _ => {
            let expected = if p.at(SyntaxKind::START_UML) {
                "a definition ('@startuml' cannot be nested)"
            } else {
                ParseContext::TopLevel.expected_description()
            };
            Err(p.error(ErrorCode::E0303, expected))
        }
    }
}

/// Check if the token after the current name is an arrow
fn at_relationship<P: DiagramParser + ?Sized>(p: &P) -> bool {
    matches!(
        p.peek_kind(1),
        Some(kind) if kind.is_link_arrow() || kind == SyntaxKind::INHERIT_ARROW
    )
}
