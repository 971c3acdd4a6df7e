//! Generation settings.
//!
//! ```ignore
//! use annogen::{Format, GenerationContext};
//!
//! let ctx = GenerationContext::new().with_format(Format::Prisma);
//! let ctx = GenerationContext::from_tag("PRISMA");
//! ```

use annogen_macros::Keyword;
use log::warn;

/// Output dialect for generated code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Keyword, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[keyword(ignore_case)]
pub enum Format {
    /// Keys are used as written, without any prefix.
    #[default]
    #[keyword("")]
    Default,
    /// Relational-schema client: keys are re-cased to `Capitalized`, prefixed
    /// with the enum name, and qualified with the `db.` namespace.
    #[keyword("PRISMA")]
    Prisma,
}

impl Format {
    /// Selects a format from its tag. Empty and unknown tags select
    /// [`Format::Default`].
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::from_ident(tag).unwrap_or_else(|| {
            warn!("unknown format tag `{tag}`, using the default format");
            Self::Default
        })
    }
}

/// Settings threaded through resolution by shared reference.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationContext {
    pub format: Format,
}

impl GenerationContext {
    pub const DEFAULT: Self = Self {
        format: Format::Default,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn from_tag(tag: &str) -> Self {
        Self::new().with_format(Format::from_tag(tag))
    }
}
