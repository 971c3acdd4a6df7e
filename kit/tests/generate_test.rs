//! Generated output for whole source files.
use annogen::{Error, Format, GenerationContext, generate};

const COLORS: &str = r#"
    package models

    // #[derive(Variants)]
    type Color string

    const (
        ColorRed Color = "red"
        ColorGreen Color = "green"
        ColorBlue Color = "blue"
    )
"#;

const ROLES: &str = r#"
    // #[derive(Variants)]
    enum Role {
        USER
        ADMIN
        SUPER_ADMIN
    }
"#;

const MIXED: &str = r#"
    // #[derive(Clone, Variants)]
    type Foo = string

    const FooOne Foo = "ONE"
    const FooTwo Foo = "TWO"

    type Untouched int
    const UntouchedA Untouched = 1

    // #[derive(Clone)]
    // #[derive(Variants)]
    enum Bar {
        A,
        B,
    }

    // #[derive(Variants)]
    enum Empty {}
"#;

#[test]
fn test_default_format() {
    let output = generate(COLORS, &GenerationContext::new()).unwrap();
    insta::assert_snapshot!("default_format", output);
}

#[test]
fn test_prisma_format() {
    let output = generate(ROLES, &GenerationContext::from_tag("PRISMA")).unwrap();
    insta::assert_snapshot!("prisma_format", output);
}

#[test]
fn test_multiple_declarations() {
    let output = generate(MIXED, &GenerationContext::new()).unwrap();
    insta::assert_snapshot!("multiple_declarations", output);
}

#[test]
fn test_exact_default_output() {
    let source = "// #[derive(Variants)]\ntype Foo string\nconst (\n\tFooOne Foo = \"ONE\"\n\tFooTwo Foo = \"TWO\"\n)";
    let output = generate(source, &GenerationContext::new()).unwrap();
    assert_eq!(output, "var FooVariants = [2]Foo{\n\tFooOne,\n\tFooTwo,\n}\n");
}

#[test]
fn test_exact_prisma_output() {
    let source = "// #[derive(Variants)]\nenum Foo {\n\tONE\n\tTWO\n\tTHREE\n}";
    let ctx = GenerationContext::new().with_format(Format::Prisma);
    let output = generate(source, &ctx).unwrap();
    assert_eq!(
        output,
        "var FooVariants = [3]db.Foo{\n\tdb.FooOne,\n\tdb.FooTwo,\n\tdb.FooThree,\n}\n"
    );
}

#[test]
fn test_unknown_tag_uses_default_format() {
    let ctx = GenerationContext::from_tag("sqlx");
    assert_eq!(ctx.format, Format::Default);
    let output = generate(ROLES, &ctx).unwrap();
    assert!(output.starts_with("var RoleVariants = [3]Role{\n\tUSER,"));
}

#[test]
fn test_generation_is_idempotent() {
    let ctx = GenerationContext::from_tag("prisma");
    assert_eq!(generate(MIXED, &ctx).unwrap(), generate(MIXED, &ctx).unwrap());
}

#[test]
fn test_no_directives_generates_nothing() {
    let output = generate("type Foo int\nconst FooA Foo = 1", &GenerationContext::new()).unwrap();
    assert_eq!(output, "");
}

#[test]
fn test_errors_yield_no_output() {
    let source = format!("{COLORS}\n// #[derive(Display)]\nenum Broken {{ A }}");
    let err = generate(&source, &GenerationContext::new()).unwrap_err();
    assert!(matches!(err, Error::UnknownTrait { ref name, .. } if name == "Display"));
}
