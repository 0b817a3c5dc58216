//! Lexical tokens produced by the match engine.
//!
//! A [`Token`] borrows both its kind (the name of the definition that
//! produced it) and its text (a slice of the source), so tokens are cheap to
//! clone and never outlive the lexer or the buffer they came from.

use crate::Span;

/// Kind of the token produced at (or past) the end of the source.
pub const EOF: &str = "EOF";

/// Kind of the token covering a run of input no definition recognizes.
pub const UNEXPECTED: &str = "UNEXPECTED";

/// One lexical unit of the source.
///
/// Tokens are built completely by the engine, including the list of skip
/// tokens folded into them, before a caller ever sees them. There are no
/// setters.
///
/// # Invariants
///
/// - An `EOF` token has empty text and starts at the source length.
/// - `UNEXPECTED` and `EOF` tokens are never skip tokens.
/// - [`skipped()`](Self::skipped) holds only skip tokens, and those carry no
///   skipped tokens of their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    kind: &'a str,
    text: &'a str,
    start: usize,
    skip: bool,
    skipped: Vec<Token<'a>>,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: &'a str, text: &'a str, start: usize, skip: bool) -> Self {
        Token {
            kind,
            text,
            start,
            skip,
            skipped: Vec::new(),
        }
    }

    pub(crate) fn eof(source: &'a str) -> Self {
        Token::new(EOF, "", source.len(), false)
    }

    pub(crate) fn unexpected(text: &'a str, start: usize) -> Self {
        Token::new(UNEXPECTED, text, start, false)
    }

    /// Attach the skip tokens consumed immediately before this one.
    ///
    /// Consumes `self` so the list is fixed before the token is published.
    #[must_use]
    pub(crate) fn with_skipped(mut self, skipped: Vec<Token<'a>>) -> Self {
        debug_assert!(!self.skip, "skip tokens never carry skipped tokens");
        debug_assert!(
            skipped.iter().all(|t| t.skip && t.skipped.is_empty()),
            "skipped list must be flat and contain only skip tokens"
        );
        self.skipped = skipped;
        self
    }

    /// Name of the definition that produced this token, or [`EOF`] /
    /// [`UNEXPECTED`].
    #[inline]
    pub fn kind(&self) -> &'a str {
        self.kind
    }

    /// Exact source text matched.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the first character.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start(), self.end())
    }

    /// Span from the first skipped token (if any) through this token.
    pub fn full_span(&self) -> Span {
        let start = self.skipped.first().map_or(self.start, Token::start);
        Span::new(start, self.end())
    }

    /// True if this token came from a definition registered with `skip`.
    #[inline]
    pub fn is_skip(&self) -> bool {
        self.skip
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == EOF
    }

    #[inline]
    pub fn is_unexpected(&self) -> bool {
        self.kind == UNEXPECTED
    }

    /// Check whether this token has the given kind.
    #[inline]
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Skip tokens consumed immediately before this token, in source order.
    #[inline]
    pub fn skipped(&self) -> &[Token<'a>] {
        &self.skipped
    }
}
