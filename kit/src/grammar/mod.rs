//! Grammar rules.
//!
//! Two rule lists drive the engine. [`DECLARATION_RULES`] runs over a whole
//! source file and recognizes declarations, with or without directive
//! comments above them. [`DIRECTIVE_RULES`] runs over the body of a single
//! directive comment.
//!
//! Every rule follows the engine contract: `Ok(None)` leaves the cursor
//! where it was, `Ok(Some(_))` has consumed at least one token, and `Err`
//! aborts the parse.

mod declaration;
mod directive;

use annogen_core::{Parser, Rule};

pub use declaration::{comment_directive, enum_declaration};
pub use directive::{attribute, attributes_directive, derive_attribute};

use crate::error::Error;
use crate::model::{Directive, Generator};
use crate::token::Token;

/// Parser over a source file.
pub type DeclarationParser = Parser<Token, Generator, Error>;

/// Parser over the body of one directive comment.
pub type DirectiveParser = Parser<Token, Directive, Error>;

/// Declaration rules in priority order. The directive rule comes first so a
/// directive comment is bound before the declaration below it could match
/// on its own.
pub const DECLARATION_RULES: &[Rule<Token, Generator, Error>] =
    &[declaration::comment_directive, declaration::enum_declaration];

pub const DIRECTIVE_RULES: &[Rule<Token, Directive, Error>] = &[directive::attributes_directive];
