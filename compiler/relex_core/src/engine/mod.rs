//! Match engine: one token per call.
//!
//! Both entry points are pure functions of `(lexer, source, pos)`. Neither
//! mutates the lexer or the input, so the same lexer can drive many
//! scanners at once.

use tracing::{debug, trace};

use crate::{Lexer, Token};

impl Lexer {
    /// Produce the token starting exactly at byte offset `pos`.
    ///
    /// 1. At or past the end of `source`, returns `EOF` (positioned at
    ///    `source.len()`).
    /// 2. Otherwise the first definition, in registration order, whose
    ///    anchored pattern matches a non-empty prefix wins, even if a later
    ///    definition would match more text.
    /// 3. If nothing matches, returns one `UNEXPECTED` token covering the
    ///    whole unrecognized run: it extends one character at a time and
    ///    stops before the first position where some definition matches, or
    ///    at the end of input.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is inside `source` but not on a `char` boundary.
    /// Positions taken from token boundaries are always valid.
    pub fn match_at<'a>(&'a self, source: &'a str, pos: usize) -> Token<'a> {
        if pos >= source.len() {
            return Token::eof(source);
        }

        if let Some(token) = self.recognize(source, pos) {
            trace!(
                kind = token.kind(),
                start = token.start(),
                end = token.end(),
                skip = token.is_skip(),
                "match"
            );
            return token;
        }

        let end = self.unrecognized_end(source, pos);
        let token = Token::unexpected(&source[pos..end], pos);
        debug!(start = pos, end, text = token.text(), "unrecognized input");
        token
    }

    /// Produce the next significant token at or after `pos`.
    ///
    /// Skip tokens are consumed in order and attached to the returned
    /// token's [`skipped`](Token::skipped) list. `EOF` and `UNEXPECTED` are
    /// never skippable, so the loop always ends.
    pub fn next_significant<'a>(&'a self, source: &'a str, pos: usize) -> Token<'a> {
        let mut skipped = Vec::new();
        let mut cursor = pos;
        loop {
            let token = self.match_at(source, cursor);
            if !token.is_skip() {
                return token.with_skipped(skipped);
            }
            // Skip tokens always consume input, so `cursor` strictly grows.
            cursor = token.end();
            skipped.push(token);
        }
    }

    /// First-match over the definitions, without recovery.
    fn recognize<'a>(&'a self, source: &'a str, pos: usize) -> Option<Token<'a>> {
        let rest = &source[pos..];
        self.definitions.iter().find_map(|def| {
            def.match_len(rest)
                .map(|len| Token::new(def.name(), &rest[..len], pos, def.is_skip()))
        })
    }

    fn is_recognized_at(&self, source: &str, pos: usize) -> bool {
        let rest = &source[pos..];
        self.definitions
            .iter()
            .any(|def| def.match_len(rest).is_some())
    }

    /// End offset of the unrecognized run starting at `start`.
    ///
    /// One probe per character, as a loop rather than recursion, so a long
    /// run of garbage costs no stack.
    fn unrecognized_end(&self, source: &str, start: usize) -> usize {
        let mut end = start;
        for ch in source[start..].chars() {
            end += ch.len_utf8();
            if end >= source.len() || self.is_recognized_at(source, end) {
                break;
            }
        }
        end
    }
}
