//! End-to-end tests for the declaration and directive grammars.
use annogen::grammar::{DECLARATION_RULES, DeclarationParser};
use annogen::{
    Attribute, Declaration, Directive, Error, Generator, ParseConfig, Span, TokenKind, TraitName,
    parse, parse_with_config, tokenize,
};
use test_case::test_case;

fn derive(traits: &[TraitName]) -> Directive {
    Directive::Attributes(vec![Attribute::Derive(traits.to_vec())])
}

fn keys(generator: &Generator) -> Vec<&str> {
    match generator.declaration() {
        Declaration::Enum(decl) => decl.variants.iter().map(|v| v.key.as_str()).collect(),
        Declaration::Struct(_) => Vec::new(),
    }
}

fn values(generator: &Generator) -> Vec<&str> {
    match generator.declaration() {
        Declaration::Enum(decl) => decl.variants.iter().map(|v| v.value.as_str()).collect(),
        Declaration::Struct(_) => Vec::new(),
    }
}

const UNGROUPED: &str = r#"
    // #[derive(Variants)]
    type Foo string

    const FooOne Foo = "ONE"
"#;

const GROUPED: &str = r#"
    // #[derive(Variants)]
    type Foo string

    const (
        FooOne Foo = "ONE"
        FooTwo Foo = "TWO"
        FooThree Foo = "THREE"
    )
"#;

const ALIAS_CLONE: &str = r#"
    // #[derive(Clone, Variants)]
    type Foo = string

    const (
        FooOne Foo = "ONE"
        FooTwo Foo = "TWO"
        FooThree Foo = "THREE"
    )
"#;

const BLOCK: &str = r#"
    // #[derive(Variants)]
    enum Foo {
        ONE
        TWO
        THREE
    }
"#;

#[test_case(UNGROUPED, &["FooOne"], &["ONE"]; "ungrouped const")]
#[test_case(GROUPED, &["FooOne", "FooTwo", "FooThree"], &["ONE", "TWO", "THREE"]; "grouped const")]
#[test_case(ALIAS_CLONE, &["FooOne", "FooTwo", "FooThree"], &["ONE", "TWO", "THREE"]; "alias with clone")]
#[test_case(BLOCK, &["ONE", "TWO", "THREE"], &["ONE", "TWO", "THREE"]; "block enum")]
fn test_directive_on_enum(source: &str, expected_keys: &[&str], expected_values: &[&str]) {
    let tokens = tokenize(source);
    let mut p = DeclarationParser::new(tokens, DECLARATION_RULES).unwrap();
    let generator = p.try_match().unwrap().unwrap();

    assert!(matches!(generator, Generator::Annotated(_)));
    assert_eq!(generator.directives().len(), 1);
    assert_eq!(generator.declaration().name(), "Foo");
    assert_eq!(keys(&generator), expected_keys);
    assert_eq!(values(&generator), expected_values);
}

#[test]
fn test_derive_lists_traits_in_order() {
    let generators = parse(ALIAS_CLONE).unwrap();
    assert_eq!(
        generators[0].directives(),
        &[derive(&[TraitName::Clone, TraitName::Variants])]
    );
}

#[test_case("//#[derive(Variants)]\nenum Foo { A }"; "no space")]
#[test_case("// #[derive(Variants)]\nenum Foo { A }"; "one space")]
fn test_marker_tolerance(source: &str) {
    let generators = parse(source).unwrap();
    assert_eq!(generators.len(), 1);
    assert_eq!(generators[0].directives(), &[derive(&[TraitName::Variants])]);
}

#[test]
fn test_plain_comment_is_not_a_directive() {
    let generators = parse("// just a note\nenum Foo { A }").unwrap();
    assert_eq!(generators.len(), 1);
    assert!(matches!(generators[0], Generator::Declaration(_)));
}

#[test]
fn test_stacked_directives_keep_source_order() {
    let source = "// #[derive(Clone)]\n// #[derive(Variants)]\nenum Foo { A }";
    let generators = parse(source).unwrap();
    assert_eq!(generators.len(), 1);
    assert_eq!(
        generators[0].directives(),
        &[derive(&[TraitName::Clone]), derive(&[TraitName::Variants])]
    );
}

#[test]
fn test_match_all_collects_in_source_order() {
    let source = r#"
        package models

        // #[derive(Variants)]
        type Color string

        const (
            ColorRed Color = "red"
            ColorBlue Color = "blue"
        )

        func (c Color) String() string { return string(c) }

        type Plain int
        const PlainA Plain = 1

        // #[derive(Variants)]
        enum Role {
            USER
            ADMIN
        }
    "#;
    let generators = parse(source).unwrap();
    let names: Vec<_> = generators.iter().map(|g| g.declaration().name()).collect();
    assert_eq!(names, vec!["Color", "Plain", "Role"]);
    assert!(generators[1].directives().is_empty());
}

#[test]
fn test_dialect_disambiguation() {
    let generators = parse("type A string\nconst AOne A = \"1\"\nenum B { X }").unwrap();
    assert_eq!(keys(&generators[0]), vec!["AOne"]);
    assert_eq!(values(&generators[0]), vec!["1"]);
    assert_eq!(keys(&generators[1]), vec!["X"]);
    assert_eq!(values(&generators[1]), vec!["X"]);
}

#[test]
fn test_iota_auto_increment() {
    let source = "type Level int\nconst (\n\tLow Level = iota\n\tMid\n\tHigh\n)";
    let generators = parse(source).unwrap();
    assert_eq!(keys(&generators[0]), vec!["Low", "Mid", "High"]);
    assert_eq!(values(&generators[0]), vec!["0", "1", "2"]);
}

#[test_case(""; "empty")]
#[test_case("func main() { fmt.Println(\"hi\") }"; "no declarations")]
#[test_case("type Foo struct { A int }"; "struct")]
#[test_case("@ $ ~ \\"; "unknown characters")]
fn test_nothing_to_collect(source: &str) {
    assert!(parse(source).unwrap().is_empty());
}

#[test]
fn test_unknown_trait_is_fatal() {
    let source = "// #[derive(Variants, Debug)]\nenum Foo { A }";
    let err = parse(source).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownTrait {
            name: "Debug".into(),
            span: Span::new(22, 27),
        }
    );
    assert_eq!(&source[22..27], "Debug");
}

#[test]
fn test_unattached_directive_is_fatal() {
    let source = "enum Foo { A }\n\n// #[derive(Variants)]\nfunc main() {}";
    let err = parse(source).unwrap_err();
    assert_eq!(
        err,
        Error::UnattachedDirective {
            directive: "// #[derive(Variants)]".into(),
            span: Span::new(16, 38),
        }
    );
    assert!(err.to_string().contains("16..38"));
}

#[test]
fn test_directive_at_end_of_input_is_fatal() {
    let err = parse("//#[derive(Variants)]").unwrap_err();
    assert!(matches!(err, Error::UnattachedDirective { .. }));
}

#[test]
fn test_unrecognized_directive_is_skipped() {
    let generators = parse("// #[serde(rename_all = \"lowercase\")]\nenum Foo { A }").unwrap();
    assert_eq!(generators.len(), 1);
    assert!(matches!(generators[0], Generator::Declaration(_)));
}

#[test]
fn test_failed_match_restores_position() {
    let source = "type Foo string\nfunc other() {}";
    let mut p = DeclarationParser::new(tokenize(source), DECLARATION_RULES).unwrap();
    for start in 0..p.tokens().len() {
        p.set_position(start);
        if p.try_match().unwrap().is_none() {
            assert_eq!(p.position(), start);
        }
    }
}

#[test]
fn test_match_all_terminates_on_garbage() {
    let source = "type type const const ( ( enum enum { { } } // #[ ] derive ( )\n".repeat(50);
    let result = parse(&source);
    assert!(result.is_ok());
}

#[test]
fn test_recursion_limit() {
    let mut source = "// #[derive(Clone)]\n".repeat(4);
    source.push_str("enum Foo { A }");

    let generators = parse_with_config(&source, ParseConfig::new().with_max_recursion_depth(4));
    assert_eq!(generators.unwrap()[0].directives().len(), 4);

    let err =
        parse_with_config(&source, ParseConfig::new().with_max_recursion_depth(3)).unwrap_err();
    assert_eq!(
        err,
        Error::Engine(annogen_core::Error::RecursionLimitExceeded { depth: 4, limit: 3 })
    );
}

#[test]
fn test_token_limit() {
    let err = parse_with_config("enum Foo { A B C }", ParseConfig::new().with_max_tokens(4))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Engine(annogen_core::Error::TokenLimitExceeded { count: 8, limit: 4 })
    ));
}

#[test]
fn test_malformed_directive_token() {
    use annogen::Token;

    let tokens = vec![
        Token::new(TokenKind::CommentDirective, "#[derive(Variants)]", Span::new(0, 19)),
        Token::new(TokenKind::Eof, "", Span::new(19, 19)),
    ];
    let mut p = DeclarationParser::new(tokens, DECLARATION_RULES).unwrap();
    let err = p.try_match().unwrap_err();
    assert!(matches!(err, Error::MalformedDirective { .. }));
}
