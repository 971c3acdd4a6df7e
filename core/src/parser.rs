//! The backtracking parser engine.
//!
//! A [`Parser`] is a cursor over a shared token sequence plus an ordered
//! list of [`Rule`]s. Rules are plain functions that either recognize a
//! value at the cursor (`Ok(Some(value))`), decline (`Ok(None)`, cursor
//! restored), or abort the whole parse (`Err`).
//!
//! The same engine drives unrelated grammars by instantiating it with a
//! different value type and rule list:
//!
//! ```ignore
//! fn keyword(p: &mut Parser<Tok, Item, MyError>) -> Result<Option<Item>, MyError> {
//!     let start = p.position();
//!     if p.advance().kind() != Kind::Let {
//!         return p.reset(start);
//!     }
//!     Ok(Some(Item::Let))
//! }
//!
//! let mut parser = Parser::new(tokens, &[keyword])?;
//! let items = parser.match_all()?;
//! ```
//!
//! # Priority
//!
//! Rules are tried in list order and the first one that matches wins. This
//! is how a grammar disambiguates overlapping shapes: put the more specific
//! rule first. Between attempts the cursor is restored to where matching
//! began, so every rule sees the same input.
#![cfg_attr(feature = "docs", doc = simple_mermaid::mermaid!("../docs/diagrams/match.mmd"))]

use std::sync::Arc;

use log::trace;

use crate::config::{ParseConfig, RecursionGuard};
use crate::traits::TokenLike;
use crate::Error;

/// A grammar rule.
///
/// Contract:
/// - `Ok(None)` must leave [`Parser::position`] exactly where it was on
///   entry. [`Parser::reset`] is the usual way to return it.
/// - `Ok(Some(_))` must have consumed at least one token.
/// - `Err(_)` is fatal and is propagated unchanged by the engine.
pub type Rule<Tok, T, E> = fn(&mut Parser<Tok, T, E>) -> Result<Option<T>, E>;

/// Cursor over a token sequence, matching an ordered rule list.
///
/// `Tok` is the token type, `T` the kind of value the rules produce and `E`
/// the grammar's error type, which must absorb engine errors.
pub struct Parser<Tok, T, E> {
    tokens: Arc<[Tok]>,
    pos: usize,
    rules: Vec<Rule<Tok, T, E>>,
    config: ParseConfig,
    depth: RecursionGuard,
}

impl<Tok, T, E> Parser<Tok, T, E>
where
    Tok: TokenLike,
    E: From<Error>,
{
    /// Creates a parser with the default [`ParseConfig`].
    ///
    /// Fails with [`Error::MissingEof`] unless the last token is the
    /// end-of-input token.
    pub fn new(tokens: impl Into<Arc<[Tok]>>, rules: &[Rule<Tok, T, E>]) -> Result<Self, Error> {
        Self::with_config(tokens, rules, ParseConfig::DEFAULT)
    }

    pub fn with_config(
        tokens: impl Into<Arc<[Tok]>>,
        rules: &[Rule<Tok, T, E>],
        config: ParseConfig,
    ) -> Result<Self, Error> {
        let tokens = tokens.into();
        config.check_tokens(tokens.len())?;
        if !tokens.last().is_some_and(TokenLike::is_eof) {
            return Err(Error::MissingEof);
        }
        Ok(Self {
            tokens,
            pos: 0,
            rules: rules.to_vec(),
            config,
            depth: RecursionGuard::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// The shared token sequence.
    #[inline]
    pub fn tokens(&self) -> &Arc<[Tok]> {
        &self.tokens
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end-of-input token.
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.last_index());
    }

    /// Restores `pos` and reports no match.
    ///
    /// ```ignore
    /// if p.advance().kind() != Kind::Enum {
    ///     return p.reset(start);
    /// }
    /// ```
    #[inline]
    pub fn reset<U>(&mut self, pos: usize) -> Result<Option<U>, E> {
        self.set_position(pos);
        Ok(None)
    }

    #[inline]
    pub fn current(&self) -> &Tok {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> Tok::Kind {
        self.current().kind()
    }

    /// Kind of the token `n` places ahead of the cursor, saturating at the
    /// end-of-input token.
    #[inline]
    pub fn peek_kind(&self, n: usize) -> Tok::Kind {
        self.peek(n).kind()
    }

    /// The token `n` places ahead of the cursor, saturating at the
    /// end-of-input token.
    #[inline]
    pub fn peek(&self, n: usize) -> &Tok {
        &self.tokens[self.pos.saturating_add(n).min(self.last_index())]
    }

    /// The token before the cursor, if any.
    #[inline]
    pub fn previous(&self) -> Option<&Tok> {
        self.pos.checked_sub(1).map(|idx| &self.tokens[idx])
    }

    #[inline]
    pub fn at_eof(&self) -> bool {
        self.current().is_eof()
    }

    /// Returns the current token and moves past it.
    ///
    /// At the end-of-input token the cursor stays put, so the end token is
    /// returned for every further call.
    pub fn advance(&mut self) -> Tok {
        let tok = self.current().clone();
        if !tok.is_eof() {
            self.pos += 1;
        }
        tok
    }

    /// Consumes the current token if it has `kind`.
    pub fn eat(&mut self, kind: Tok::Kind) -> bool {
        if self.current_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advances through `kinds` in order, returning `false` at the first
    /// token that does not match. Tokens up to and including the mismatch
    /// are consumed; the caller restores the position.
    pub fn advance_sequence(&mut self, kinds: &[Tok::Kind]) -> bool {
        kinds.iter().all(|&kind| self.advance().kind() == kind)
    }

    /// Tries this parser's rules at the cursor.
    pub fn try_match(&mut self) -> Result<Option<T>, E> {
        let rules = self.rules.clone();
        self.first_match(&rules)
    }

    /// Tries `rules` in order at the cursor.
    ///
    /// The first rule that returns a value wins. The cursor is restored
    /// before each further attempt and again when nothing matches. Errors
    /// abort immediately.
    ///
    /// The alternatives may produce any value type, so a rule can offer a
    /// choice between sub-shapes (say, two spellings of the same
    /// declaration) with the same priority and backtracking semantics as
    /// the top-level rule list.
    pub fn first_match<U>(
        &mut self,
        rules: &[fn(&mut Self) -> Result<Option<U>, E>],
    ) -> Result<Option<U>, E> {
        let start = self.pos;
        for (idx, rule) in rules.iter().enumerate() {
            if let Some(value) = rule(self)? {
                trace!("rule #{idx} matched tokens {start}..{}", self.pos);
                return Ok(Some(value));
            }
            self.set_position(start);
        }
        Ok(None)
    }

    /// Like [`try_match`](Self::try_match) but treats no match as an error.
    pub fn must_match(&mut self) -> Result<T, E> {
        match self.try_match()? {
            Some(value) => Ok(value),
            None => Err(Error::NoMatch { position: self.pos }.into()),
        }
    }

    /// Scans from the cursor to the end of input, collecting every match.
    ///
    /// After a match scanning resumes behind the consumed tokens; positions
    /// where no rule matches are skipped one token at a time. Every
    /// iteration moves the cursor forward, so the scan terminates.
    pub fn match_all(&mut self) -> Result<Vec<T>, E> {
        let mut values = Vec::new();
        while !self.at_eof() {
            let start = self.pos;
            if let Some(value) = self.try_match()? {
                values.push(value);
            }
            if self.pos <= start {
                self.set_position(start);
                self.advance();
            }
        }
        Ok(values)
    }

    /// Enters a nested use of the engine.
    ///
    /// Rules that call back into [`try_match`](Self::try_match) from
    /// inside a rule bracket the call with `enter_nested` / `exit_nested`.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        self.depth.enter(self.config.max_recursion_depth)
    }

    #[inline]
    pub fn exit_nested(&mut self) {
        self.depth.exit();
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.tokens.len() - 1
    }
}

impl<Tok, T, E> std::fmt::Debug for Parser<Tok, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("pos", &self.pos)
            .field("tokens", &self.tokens.len())
            .field("rules", &self.rules.len())
            .field("depth", &self.depth.depth())
            .finish()
    }
}
