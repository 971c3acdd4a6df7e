//! Tokenizer.
//!
//! [`tokenize`] turns source text into [`Token`]s. Whitespace and ordinary
//! `//` line comments are trivia; a `//` comment whose body starts with
//! `#[` (optionally after one space) is kept whole as a
//! [`TokenKind::CommentDirective`]. Characters the lexer does not recognize
//! become [`TokenKind::Unknown`], so tokenizing never fails. Every token
//! sequence ends with exactly one [`TokenKind::Eof`].

use core::fmt;

use annogen_core::{SpanLike, TokenLike};
use logos::Logos;

/// Byte range of a token in the text it was tokenized from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl SpanLike for Span {
    #[inline]
    fn start(&self) -> usize {
        self.start
    }

    #[inline]
    fn end(&self) -> usize {
        self.end
    }

    #[inline]
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Literals
    #[token("null")]
    Null,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"`[^`]*`")]
    String,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    // Grouping & braces
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenCurly,
    #[token("}")]
    CloseCurly,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Equivalence
    #[token("=")]
    Assignment,
    #[token("==")]
    Equals,
    #[token("!=")]
    NotEquals,
    #[token("!")]
    Not,

    // Conditional
    #[token("<")]
    Less,
    #[token("<=")]
    LessEquals,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEquals,

    // Logical
    #[token("||")]
    Or,
    #[token("&&")]
    And,

    // Symbols
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token(";")]
    SemiColon,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token(",")]
    Comma,
    #[token("#")]
    Hashtag,

    // Shorthand
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEquals,
    #[token("-=")]
    MinusEquals,
    #[token("??=")]
    NullishAssignment,

    // Maths
    #[token("+")]
    Plus,
    #[token("-")]
    Dash,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,
    #[token("%")]
    Percent,

    // Reserved words
    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("class")]
    Class,
    #[token("import")]
    Import,
    #[token("from")]
    From,
    #[token("fn")]
    Fn,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("foreach")]
    Foreach,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("export")]
    Export,
    #[token("typeof")]
    Typeof,
    #[token("in")]
    In,
    #[token("enum")]
    Enum,
    #[token("type")]
    Type,
    #[token("iota")]
    Iota,
    #[token("derive")]
    Derive,

    // Comments. Both patterns run to the end of the line, so the directive
    // needs the higher priority to win the tie.
    #[regex(r"//[ ]?#\[[^\n]*", priority = 10, allow_greedy = true)]
    CommentDirective,
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    LineComment,

    Unknown,
    Eof,
}

/// A lexical token: its kind, its exact source text and where it came from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl TokenLike for Token {
    type Kind = TokenKind;
    type Span = Span;

    #[inline]
    fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    fn span(&self) -> &Span {
        &self.span
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input at {}", self.span),
            _ => write!(f, "`{}` at {}", self.text, self.span),
        }
    }
}

/// Tokenizes `source`.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_at(source, 0)
}

/// Tokenizes `source` as if it started `offset` bytes into a larger text.
///
/// Directive comments are re-tokenized on their own; shifting their spans
/// keeps diagnostics pointing at the enclosing file.
pub fn tokenize_at(source: &str, offset: usize) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Unknown);
        let range = lexer.span();
        let span = Span::new(range.start, range.end).shift(offset);
        tokens.push(Token::new(kind, lexer.slice(), span));
    }

    let end = Span::new(source.len(), source.len()).shift(offset);
    tokens.push(Token::new(TokenKind::Eof, "", end));
    tokens
}
