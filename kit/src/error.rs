use thiserror::Error;

use crate::token::Span;

/// Fatal conditions that abort parsing or generation of an input.
///
/// A rule that simply does not recognize its shape is not an error; these
/// variants mean the input is malformed and must be fixed at the source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] annogen_core::Error),

    /// A directive comment with no declaration the grammar can attach it to.
    #[error("directive `{directive}` at {span} is not followed by a supported declaration")]
    UnattachedDirective { directive: String, span: Span },

    /// `derive(...)` names a trait outside the known set.
    #[error("expected a known trait in derive(...), found `{name}` at {span}")]
    UnknownTrait { name: String, span: Span },

    /// A directive token that does not start with the `//` marker.
    #[error("malformed directive `{text}` at {span}: expected `//` at the start")]
    MalformedDirective { text: String, span: Span },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
