#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Language-agnostic core of annogen: a backtracking parser engine over any
//! token type, its resource limits, and the printer trait generators write
//! into.

pub mod config;
mod error;
pub mod parser;
pub mod traits;

pub use config::{ParseConfig, RecursionGuard};
pub use error::Error;
pub use parser::{Parser, Rule};
pub use traits::{Printer, SpanLike, TokenLike};
