//! Resolution of bound directives into generated code.
//!
//! [`resolve`] is the single place where a directive meets a declaration.
//! It matches exhaustively over both, so adding a trait or a declaration
//! kind forces a decision here.

use annogen_core::Printer;
use log::debug;

use crate::context::{Format, GenerationContext};
use crate::error::Result;
use crate::model::{
    AnnotatedDeclaration, Attribute, Declaration, Directive, Enum, Generator, TraitName,
};

/// [`Printer`] for generated Go source: tab indentation.
#[derive(Debug, Default)]
pub struct CodePrinter {
    buf: String,
    indent: usize,
}

impl CodePrinter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Printer for CodePrinter {
    fn buf(&self) -> &str {
        &self.buf
    }

    fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    fn indent_level(&self) -> usize {
        self.indent
    }

    fn set_indent(&mut self, level: usize) {
        self.indent = level;
    }

    fn into_string(self) -> String {
        self.buf
    }
}

/// Generates the code `directive` asks for on `declaration`.
///
/// Trait and declaration pairs with nothing to generate yield an empty
/// string. Each generated item ends with a newline; several items are
/// separated by a blank line.
pub fn resolve(
    directive: &Directive,
    declaration: &Declaration,
    ctx: &GenerationContext,
) -> Result<String> {
    let mut out = CodePrinter::new();
    match directive {
        Directive::Attributes(attributes) => {
            for attribute in attributes {
                match attribute {
                    Attribute::Derive(traits) => {
                        for &name in traits {
                            derive(&mut out, name, declaration, ctx);
                        }
                    }
                }
            }
        }
    }
    Ok(out.into_string())
}

fn derive(
    out: &mut CodePrinter,
    name: TraitName,
    declaration: &Declaration,
    ctx: &GenerationContext,
) {
    match (name, declaration) {
        (TraitName::Variants, Declaration::Enum(decl)) => variants_array(out, decl, ctx),
        (TraitName::Variants, Declaration::Struct(_)) | (TraitName::Clone, _) => {
            debug!("derive({name}) on `{}` generates nothing", declaration.name());
        }
    }
}

/// `var FooVariants = [N]Foo{ ... }` listing every variant in order.
fn variants_array(out: &mut CodePrinter, decl: &Enum, ctx: &GenerationContext) {
    let (namespace, key_prefix, recase) = match ctx.format {
        Format::Default => ("", "", false),
        Format::Prisma => ("db.", decl.name.as_str(), true),
    };
    let items = decl.variants.iter().map(|variant| {
        let key = if recase {
            go_case(&variant.key)
        } else {
            variant.key.clone()
        };
        format!("{namespace}{key_prefix}{key}")
    });

    if !out.buf().is_empty() {
        out.newline();
    }
    out.word(&format!(
        "var {name}Variants = [{len}]{namespace}{name}",
        name = decl.name,
        len = decl.variants.len()
    ));
    out.open_block("{");
    out.write_separated(items, ",", true, true);
    out.close_block("}");
    out.newline();
}

/// Re-cases an `UPPER_UNDERSCORE` identifier to `UpperUnderscore`.
///
/// Each `_`-separated word keeps its first character upper-cased and the
/// rest lower-cased; the underscores are dropped.
pub fn go_case(ident: &str) -> String {
    ident.split('_').map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Joins non-empty fragments with one blank line between them.
pub(crate) fn join_fragments(fragments: impl IntoIterator<Item = String>) -> String {
    fragments
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

impl AnnotatedDeclaration {
    /// Output of every directive on this declaration, in directive order.
    pub fn generate(&self, ctx: &GenerationContext) -> Result<String> {
        let fragments = self
            .directives
            .iter()
            .map(|directive| resolve(directive, &self.value, ctx))
            .collect::<Result<Vec<_>>>()?;
        Ok(join_fragments(fragments))
    }
}

impl Generator {
    /// Generated code for this value. Bare declarations generate nothing.
    pub fn generate(&self, ctx: &GenerationContext) -> Result<String> {
        match self {
            Generator::Declaration(_) => Ok(String::new()),
            Generator::Annotated(annotated) => annotated.generate(ctx),
        }
    }
}
