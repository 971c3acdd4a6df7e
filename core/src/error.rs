//! Core error types for annogen.
//!
//! Grammar crates define their own error type and implement
//! `From<annogen_core::Error>` so that engine failures propagate through
//! rule functions with `?`.
//!
//! # Example
//!
//! ```ignore
//! use thiserror::Error;
//!
//! #[derive(Error, Debug)]
//! pub enum MyError {
//!     #[error(transparent)]
//!     Engine(#[from] annogen_core::Error),
//!
//!     #[error("unknown trait `{name}`")]
//!     UnknownTrait { name: String },
//! }
//! ```

use thiserror::Error;

/// Errors raised by the parser engine itself.
///
/// A rule that merely fails to recognize its shape never produces one of
/// these; it restores the cursor and returns `Ok(None)`. These variants are
/// reserved for conditions that abort the whole parse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `must_match` found no rule matching at `position`.
    #[error("expected a match at token position {position}")]
    NoMatch {
        /// Token index the engine was positioned at.
        position: usize,
    },

    /// Recursion limit exceeded during parsing.
    ///
    /// Rules that re-enter the engine (for example, a directive rule that
    /// parses its subject declaration) bump a depth counter. Input with
    /// thousands of stacked directives would otherwise grow the stack
    /// without bound.
    #[error("recursion limit exceeded: depth {depth} > limit {limit}")]
    RecursionLimitExceeded {
        /// Current recursion depth when limit was exceeded.
        depth: usize,
        /// Maximum allowed recursion depth.
        limit: usize,
    },

    /// The token sequence handed to the parser is longer than allowed.
    #[error("token limit exceeded: {count} tokens > limit {limit}")]
    TokenLimitExceeded {
        /// Number of tokens supplied.
        count: usize,
        /// Maximum allowed token count.
        limit: usize,
    },

    /// The token sequence is empty or does not end with an end-of-input
    /// token, so the cursor could run off the end.
    #[error("token sequence is not terminated by an end-of-input token")]
    MissingEof,
}
