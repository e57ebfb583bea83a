use super::*;

/// actor_def := "actor" entity_name alias? stereotype?
pub fn parse_actor_def<P: DiagramParser + ?Sized>(p: &mut P) -> Result<ActorDef, SyntaxError> {
    in_context(p, ParseContext::ActorDeclaration, |p| {
        let line = p.current_line();
        p.bump(); // actor
        let name = parse_entity_name(p, "an actor name")?;
        let alias = parse_alias(p)?;
        let stereotype = parse_stereotype(p);
        Ok(ActorDef {
            name,
            alias,
            stereotype,
            line,
        })
    })
}

/// actor_def := ACTOR_TEXT alias? stereotype?
pub fn parse_actor_literal_def<P: DiagramParser + ?Sized>(
    p: &mut P,
) -> Result<ActorDef, SyntaxError> {
    in_context(p, ParseContext::ActorDeclaration, |p| {
        let line = p.current_line();
        let name = Name::new(p.bump_text(), NameForm::ActorText);
        let alias = parse_alias(p)?;
        let stereotype = parse_stereotype(p);
        Ok(ActorDef {
            name,
            alias,
            stereotype,
            line,
        })
    })
}

/// usecase_def := "usecase" entity_name alias? stereotype?
pub fn parse_usecase_def<P: DiagramParser + ?Sized>(p: &mut P) -> Result<UseCaseDef, SyntaxError> {
    in_context(p, ParseContext::UseCaseDeclaration, |p| {
        let line = p.current_line();
        p.bump(); // usecase
        let name = parse_entity_name(p, "a use case name")?;
        let alias = parse_alias(p)?;
        let stereotype = parse_stereotype(p);
        Ok(UseCaseDef {
            name,
            alias,
            stereotype,
            line,
        })
    })
}

/// usecase_def := USE_CASE_TEXT alias? stereotype?
pub fn parse_usecase_literal_def<P: DiagramParser + ?Sized>(
    p: &mut P,
) -> Result<UseCaseDef, SyntaxError> {
    in_context(p, ParseContext::UseCaseDeclaration, |p| {
        let line = p.current_line();
        let name = Name::new(p.bump_text(), NameForm::UseCaseText);
        let alias = parse_alias(p)?;
        let stereotype = parse_stereotype(p);
        Ok(UseCaseDef {
            name,
            alias,
            stereotype,
            line,
        })
    })
}

/// entity_name := IDENTIFIER | ACTOR_TEXT | USE_CASE_TEXT | STRING
pub fn parse_entity_name<P: DiagramParser + ?Sized>(
    p: &mut P,
    expected: &str,
) -> Result<Name, SyntaxError> {
    let form = match p.current_kind() {
        Some(SyntaxKind::IDENT) => NameForm::Identifier,
        Some(SyntaxKind::ACTOR_TEXT) => NameForm::ActorText,
        Some(SyntaxKind::USE_CASE_TEXT) => NameForm::UseCaseText,
        Some(SyntaxKind::STRING) => NameForm::Quoted,
        Some(kind) if kind.is_keyword() => {
            let err = p.error(ErrorCode::E0301, expected);
            return Err(err.with_hint(format!(
                "{} is reserved; quote it to use it as a name",
                kind.display_name()
            )));
        }
        _ => return Err(p.error(ErrorCode::E0301, expected)),
    };
    Ok(Name::new(p.bump_text(), form))
}

/// alias := "as" IDENTIFIER | ε
pub fn parse_alias<P: DiagramParser + ?Sized>(p: &mut P) -> Result<Option<SmolStr>, SyntaxError> {
    if !p.eat(SyntaxKind::AS_KW) {
        return Ok(None);
    }
    if p.at(SyntaxKind::IDENT) {
        Ok(Some(p.bump_text()))
    } else {
        Err(p
            .error(ErrorCode::E0302, "an identifier after 'as'")
            .with_hint("an alias is a plain identifier, not a literal"))
    }
}

/// stereotype := STEREOTYPE | ε
pub fn parse_stereotype<P: DiagramParser + ?Sized>(p: &mut P) -> Option<SmolStr> {
    if p.at(SyntaxKind::STEREOTYPE) {
        Some(p.bump_text())
    } else {
        None
    }
}

/// package_def := "package" IDENTIFIER "{" definition_list "}"
pub fn parse_package_def<P: DiagramParser + ?Sized>(p: &mut P) -> Result<PackageDef, SyntaxError> {
    let line = p.current_line();
    p.enter_package()?;

    let name = in_context(p, ParseContext::PackageDeclaration, |p| {
        p.bump(); // package
        if !p.at(SyntaxKind::IDENT) {
            return Err(p
                .error(ErrorCode::E0301, "a package name")
                .with_hint("a package name is a plain identifier"));
        }
        let name = p.bump_text();
        if !p.eat(SyntaxKind::L_BRACE) {
            return Err(p.error(ErrorCode::E0206, "'{'"));
        }
        Ok(name)
    })?;

    let contents = in_context(p, ParseContext::PackageBody, |p| {
        let contents = parse_definition_list(p)?;
        if !p.eat(SyntaxKind::R_BRACE) {
            return Err(p
                .error(ErrorCode::E0202, "'}'")
                .with_hint(format!("package '{}' opened at line {} is never closed", name, line)));
        }
        Ok(contents)
    })?;

    p.leave_package();
    Ok(PackageDef {
        name,
        contents,
        line,
    })
}
