#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Procedural macros for annogen.
//!
//! - [`Keyword`](derive@Keyword): closed identifier tables such as derive
//!   trait names or output format tags.
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod keyword;

/// Derives a lookup table between a fieldless enum and its source text.
///
/// Each variant maps to its own identifier unless overridden with
/// `#[keyword("text")]`. `#[keyword(ignore_case)]` on the enum makes
/// `from_ident` compare ASCII case-insensitively.
///
/// # Generated Items
///
/// - `ALL`: every variant, in declaration order
/// - `as_str(&self) -> &'static str`
/// - `from_ident(&str) -> Option<Self>`
/// - `Display`, writing `as_str()`
///
/// # Example
///
/// ```ignore
/// use annogen_macros::Keyword;
///
/// #[derive(Keyword, Debug, Clone, Copy, PartialEq, Eq)]
/// #[keyword(ignore_case)]
/// pub enum Format {
///     #[keyword("")]
///     Default,
///     #[keyword("PRISMA")]
///     Prisma,
/// }
///
/// assert_eq!(Format::from_ident("prisma"), Some(Format::Prisma));
/// assert_eq!(Format::Prisma.to_string(), "PRISMA");
/// ```
#[proc_macro_derive(Keyword, attributes(keyword))]
pub fn derive_keyword(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    keyword::KeywordInput::try_from(input)
        .and_then(keyword::expand)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
