use super::*;

/// Parse a link or an inheritance, which share the `name_ref arrow name_ref` shape
///
/// inheritance := name_ref "<|--" name_ref
/// link        := name_ref arrow name_ref qualifier?
pub fn parse_relationship<P: DiagramParser + ?Sized>(
    p: &mut P,
) -> Result<Definition, SyntaxError> {
    let line = p.current_line();
    let source = parse_name_ref(p, ErrorCode::E0301, "a name")?;

    match p.current_kind() {
        // `Child <|-- Parent`: the arrow points at the parent
        Some(SyntaxKind::INHERIT_ARROW) => in_context(p, ParseContext::Inheritance, |p| {
            p.bump();
            let parent = parse_name_ref(p, ErrorCode::E0402, "a parent name")?;
            Ok(Definition::Inheritance(InheritanceLink {
                parent,
                child: source,
                line,
            }))
        }),
        Some(kind) if kind.is_link_arrow() => in_context(p, ParseContext::Link, |p| {
            let arrow = if kind == SyntaxKind::SOLID_ARROW {
                ArrowStyle::Solid
            } else {
                ArrowStyle::Dotted
            };
            p.bump();
            let to = parse_name_ref(p, ErrorCode::E0402, "a link target")?;
            let qualifier = parse_qualifier(p)?;
            Ok(Definition::Association(AssociationLink {
                from: source,
                to,
                arrow,
                qualifier,
                line,
            }))
        }),
        _ => in_context(p, ParseContext::Link, |p| {
            let err = p.error(ErrorCode::E0401, "an arrow ('-->', '..>' or '<|--')");
            Err(if source.is_identifier() {
                err.with_hint(format!(
                    "declare entities with 'actor {0}' or 'usecase {0}'",
                    source.as_str()
                ))
            } else {
                err
            })
        }),
    }
}

/// name_ref := IDENTIFIER | ACTOR_TEXT | USE_CASE_TEXT
pub fn parse_name_ref<P: DiagramParser + ?Sized>(
    p: &mut P,
    code: ErrorCode,
    expected: &str,
) -> Result<Name, SyntaxError> {
    match p.current_kind() {
        Some(kind) if kind.is_name_ref() => {
            let form = match kind {
                SyntaxKind::ACTOR_TEXT => NameForm::ActorText,
                SyntaxKind::USE_CASE_TEXT => NameForm::UseCaseText,
                _ => NameForm::Identifier,
            };
            Ok(Name::new(p.bump_text(), form))
        }
        Some(SyntaxKind::STRING) => Err(p
            .error(code, expected)
            .with_hint("quoted names can only be declared; refer to them through an alias")),
        _ => Err(p.error(code, expected)),
    }
}

/// qualifier := ":" ("extends" | "includes" | IDENTIFIER) | ε
pub fn parse_qualifier<P: DiagramParser + ?Sized>(
    p: &mut P,
) -> Result<Option<Qualifier>, SyntaxError> {
    if !p.at(SyntaxKind::COLON) {
        return Ok(None);
    }
    in_context(p, ParseContext::Qualifier, |p| {
        p.bump(); // :
        let qualifier = match p.current_kind() {
            Some(SyntaxKind::EXTENDS_KW) => Qualifier::Extends,
            Some(SyntaxKind::INCLUDES_KW) => Qualifier::Includes,
            Some(SyntaxKind::IDENT) => Qualifier::Label(SmolStr::new(p.current_text())),
            _ => return Err(p.error(ErrorCode::E0403, "'extends', 'includes' or a label")),
        };
        p.bump();
        Ok(Some(qualifier))
    })
}
