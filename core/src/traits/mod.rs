//! Traits the engine is generic over.
//!
//! ```text
//! TokenLike (what the cursor walks over)
//!     └── SpanLike (where a token came from)
//!
//! Printer (text emission for generated code)
//! ```
//!
//! A grammar crate supplies one token type implementing [`TokenLike`] and
//! one printer implementing [`Printer`]; the engine never looks at token
//! text.

mod printer;
mod token;

pub use printer::Printer;
pub use token::{SpanLike, TokenLike};
