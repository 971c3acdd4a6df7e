use core::fmt;

/// A span representing a source location range.
///
/// Spans track the byte offsets of tokens within source text.
pub trait SpanLike: Clone {
    /// Returns the start byte offset.
    fn start(&self) -> usize;

    /// Returns the end byte offset (exclusive).
    fn end(&self) -> usize;

    /// Creates a new span from start and end offsets.
    fn new(start: usize, end: usize) -> Self;

    /// Returns the length of this span.
    ///
    /// Uses saturating subtraction, so an inverted span has length `0`.
    #[inline]
    fn len(&self) -> usize {
        self.end().saturating_sub(self.start())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns this span moved `offset` bytes to the right.
    ///
    /// Used when a token's text is re-tokenized on its own: the inner
    /// tokens are produced relative to the substring and shifted back into
    /// the coordinates of the enclosing text.
    #[inline]
    fn shift(&self, offset: usize) -> Self {
        Self::new(
            self.start().saturating_add(offset),
            self.end().saturating_add(offset),
        )
    }
}

/// A lexical token the engine can walk over.
///
/// The engine only needs three facts about a token: its kind (rules compare
/// kinds), its span (for diagnostics) and whether it marks the end of input.
/// Token sequences handed to the engine must end with exactly one token for
/// which [`is_eof`](TokenLike::is_eof) is `true`.
pub trait TokenLike: Clone {
    /// The closed set of token kinds.
    type Kind: Copy + Eq + fmt::Debug;

    /// The span type used to track source locations.
    type Span: SpanLike;

    /// Returns the kind of this token.
    fn kind(&self) -> Self::Kind;

    /// Returns the source span of this token.
    fn span(&self) -> &Self::Span;

    /// Returns `true` for the end-of-input token.
    fn is_eof(&self) -> bool;
}
