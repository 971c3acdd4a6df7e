#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Code generation from comment directives.
//!
//! A directive such as `// #[derive(Variants)]` written directly above an
//! enum declaration asks for an array listing every variant:
//!
//! ```ignore
//! use annogen::GenerationContext;
//!
//! let source = r#"
//!     // #[derive(Variants)]
//!     type Foo string
//!
//!     const (
//!         FooOne Foo = "ONE"
//!         FooTwo Foo = "TWO"
//!     )
//! "#;
//! let out = annogen::generate(source, &GenerationContext::new())?;
//! assert_eq!(out, "var FooVariants = [2]Foo{\n\tFooOne,\n\tFooTwo,\n}\n");
//! ```
//!
//! The pipeline is [`tokenize`], then the [`grammar`] rules driven by the
//! backtracking [`Parser`](annogen_core::Parser), then [`resolve`] for each
//! directive bound to a declaration.

mod context;
mod error;
pub mod generate;
pub mod grammar;
mod model;
mod token;

use log::debug;

pub use annogen_core::{ParseConfig, Printer, SpanLike, TokenLike};
pub use annogen_macros::Keyword;
pub use context::{Format, GenerationContext};
pub use error::{Error, Result};
pub use generate::{CodePrinter, go_case, resolve};
pub use model::{
    AnnotatedDeclaration, Attribute, Declaration, Directive, Enum, EnumVariant, Generator, Struct,
    TraitName,
};
pub use token::{Span, Token, TokenKind, tokenize, tokenize_at};

use grammar::{DECLARATION_RULES, DeclarationParser};

/// Every declaration in `source`, with the directives bound to it.
pub fn parse(source: &str) -> Result<Vec<Generator>> {
    parse_with_config(source, ParseConfig::DEFAULT)
}

/// [`parse`] with explicit engine limits.
pub fn parse_with_config(source: &str, config: ParseConfig) -> Result<Vec<Generator>> {
    let tokens = tokenize(source);
    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    DeclarationParser::with_config(tokens, DECLARATION_RULES, config)?.match_all()
}

/// Generated code for every annotated declaration in `source`, in source
/// order, with a blank line between declarations.
pub fn generate(source: &str, ctx: &GenerationContext) -> Result<String> {
    let fragments = parse(source)?
        .iter()
        .map(|generator| generator.generate(ctx))
        .collect::<Result<Vec<_>>>()?;
    Ok(generate::join_fragments(fragments))
}
