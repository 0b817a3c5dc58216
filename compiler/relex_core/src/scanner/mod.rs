//! Cursor over one source buffer for a recursive descent parser.
//!
//! The scanner owns nothing but a byte position. Every read goes through
//! [`Lexer::next_significant`], so skip tokens are folded transparently and
//! [`advance`](Scanner::advance) lands past both the skipped tokens and the
//! significant token in a single assignment.

use tracing::trace;

use crate::{Lexer, ScanError, Token};

/// Stateful cursor pairing a shared [`Lexer`] with one source buffer.
///
/// Position-changing operations take `&mut self`; a scanner is driven by
/// one parser at a time. The lexer itself is shared read-only.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    lexer: &'a Lexer,
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `source`.
    pub fn new(lexer: &'a Lexer, source: &'a str) -> Self {
        Scanner {
            lexer,
            source,
            pos: 0,
        }
    }

    pub fn lexer(&self) -> &'a Lexer {
        self.lexer
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset, for diagnostics and error spans.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unscanned input, starting at the current position.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or_default()
    }

    /// True once the position has reached the end of the source.
    ///
    /// Trailing skip tokens still count as input: a scanner positioned
    /// before trailing whitespace is not at the end, although
    /// [`peek`](Self::peek) already returns `EOF`.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Next significant token, without moving.
    ///
    /// Calling `peek` repeatedly with no intervening move returns equal
    /// tokens.
    pub fn peek(&self) -> Token<'a> {
        self.lexer.next_significant(self.source, self.pos)
    }

    /// Check if the next significant token has the given kind.
    pub fn check(&self, kind: &str) -> bool {
        self.peek().is(kind)
    }

    /// Read the next significant token and move past it.
    pub fn advance(&mut self) -> Token<'a> {
        let token = self.peek();
        trace!(
            pos = self.pos,
            kind = token.kind(),
            start = token.start(),
            end = token.end(),
            skipped = token.skipped().len(),
            "advance"
        );
        self.pos = token.end();
        token
    }

    /// Read the next significant token and require its kind.
    ///
    /// On mismatch the scanner has still moved past the token it read; the
    /// parser decides how to recover.
    #[inline]
    pub fn expect(&mut self, kind: &str) -> Result<Token<'a>, ScanError> {
        let token = self.advance();
        if token.is(kind) {
            Ok(token)
        } else {
            Err(Self::make_expect_error(kind, &token))
        }
    }

    /// Build the error for a failed `expect()` call.
    #[cold]
    #[inline(never)]
    fn make_expect_error(kind: &str, found: &Token<'_>) -> ScanError {
        trace!(expected = kind, found = found.kind(), start = found.start(), "expect failed");
        ScanError::unexpected_kind(kind, found)
    }

    /// Consume the next significant token only if it has the given kind.
    pub fn eat(&mut self, kind: &str) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is(kind) {
            self.mark_read(&token);
            Some(token)
        } else {
            None
        }
    }

    /// Commit to a token obtained from [`peek`](Self::peek): move to its end.
    pub fn mark_read(&mut self, token: &Token<'a>) {
        trace!(from = self.pos, to = token.end(), "mark read");
        self.seek(token.end());
    }

    /// Roll back to a token's start, so it is read again next.
    ///
    /// The token's skipped tokens are not re-read.
    pub fn mark_unread(&mut self, token: &Token<'a>) {
        trace!(from = self.pos, to = token.start(), "mark unread");
        self.seek(token.start());
    }

    fn seek(&mut self, pos: usize) {
        debug_assert!(
            self.source.is_char_boundary(pos),
            "offset {pos} is not a char boundary of this scanner's source"
        );
        self.pos = pos;
    }

    /// Consume-if-present with two continuations.
    ///
    /// If the next significant token has kind `kind`, it is marked read and
    /// `then` runs with it; otherwise the position is untouched and
    /// `otherwise` runs.
    pub fn if_next<T>(
        &mut self,
        kind: &str,
        then: impl FnOnce(&mut Self, Token<'a>) -> T,
        otherwise: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let token = self.peek();
        if token.is(kind) {
            self.mark_read(&token);
            then(self, token)
        } else {
            otherwise(self)
        }
    }

    /// Iterate over the remaining significant tokens, stopping before `EOF`.
    ///
    /// The iterator borrows the scanner and advances it; once it is dropped
    /// the scanner can be used again from wherever iteration stopped.
    pub fn tokens(&mut self) -> Tokens<'_, 'a> {
        Tokens { scanner: self }
    }
}

/// Iterator returned by [`Scanner::tokens`].
#[derive(Debug)]
pub struct Tokens<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
}

impl<'a> Iterator for Tokens<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.scanner.advance();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
