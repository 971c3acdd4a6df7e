//! Engine configuration for resource limits.
//!
//! [`ParseConfig`] bounds how deep rules may re-enter the engine and how
//! many tokens a single parser accepts.
//!
//! # Example
//!
//! ```ignore
//! use annogen_core::ParseConfig;
//!
//! // Default limits (nesting depth: 128, tokens: unlimited)
//! let config = ParseConfig::default();
//!
//! // Tighter limits for untrusted input
//! let config = ParseConfig::new()
//!     .with_max_recursion_depth(16)
//!     .with_max_tokens(1 << 20);
//! ```

use crate::Error;

/// Configuration for engine resource limits.
///
/// | Setting | Default |
/// |---------|---------|
/// | `max_recursion_depth` | 128 |
/// | `max_tokens` | `usize::MAX` |
///
/// Recursion happens when a rule drives the engine again from inside
/// itself, e.g. a directive comment asking for the declaration that follows
/// it. A file with one directive per line stacked above a single
/// declaration nests once per directive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum nesting depth of rules re-entering the engine.
    pub max_recursion_depth: usize,

    /// Maximum number of tokens (including the end-of-input token) a parser
    /// will accept.
    pub max_tokens: usize,
}

impl Default for ParseConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParseConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        max_recursion_depth: 128,
        max_tokens: usize::MAX,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the maximum nesting depth. `usize::MAX` disables the limit.
    #[inline]
    pub const fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Sets the maximum token count. `usize::MAX` disables the limit.
    #[inline]
    pub const fn with_max_tokens(mut self, count: usize) -> Self {
        self.max_tokens = count;
        self
    }

    /// Disables the recursion limit.
    ///
    /// Only use this for trusted input.
    #[inline]
    pub const fn disable_recursion_limit(self) -> Self {
        self.with_max_recursion_depth(usize::MAX)
    }

    /// Fails with [`Error::TokenLimitExceeded`] if `count` is over the limit.
    #[inline]
    pub fn check_tokens(&self, count: usize) -> Result<(), Error> {
        if count > self.max_tokens {
            Err(Error::TokenLimitExceeded {
                count,
                limit: self.max_tokens,
            })
        } else {
            Ok(())
        }
    }
}

/// Tracks nesting depth while rules re-enter the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursionGuard {
    depth: usize,
}

impl RecursionGuard {
    /// Creates a new guard with depth 0.
    #[inline]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Current nesting depth.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a nested context, incrementing depth.
    ///
    /// Returns `Err(Error::RecursionLimitExceeded)` if the new depth would
    /// exceed `limit`.
    #[inline]
    pub fn enter(&mut self, limit: usize) -> Result<(), Error> {
        self.depth = self.depth.saturating_add(1);
        if self.depth > limit {
            Err(Error::RecursionLimitExceeded {
                depth: self.depth,
                limit,
            })
        } else {
            Ok(())
        }
    }

    /// Exit a nested context. Saturates at zero.
    #[inline]
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Reset depth to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.depth = 0;
    }
}
