//! Registration-time and scan-time errors.

use thiserror::Error;

use crate::{Span, Token};

/// A pattern definition was rejected while building a lexer.
///
/// These are programmer errors in registry construction; the builder chain
/// stops at the first one.
#[derive(Error, Debug)]
pub enum DefineError {
    #[error("token definition has an empty name")]
    EmptyName,

    #[error("token name `{name}` is reserved by the lexer")]
    ReservedName { name: String },

    #[error("invalid pattern for token `{name}`: empty pattern")]
    EmptyPattern { name: String },

    #[error("invalid pattern for token `{name}`: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// The pattern accepts the empty string, so it could match without
    /// consuming input and stall skip folding.
    #[error("pattern for token `{name}` matches the empty string")]
    MatchesEmpty { name: String },
}

impl DefineError {
    /// Name of the rejected definition, if it had one.
    pub fn name(&self) -> Option<&str> {
        match self {
            DefineError::EmptyName => None,
            DefineError::ReservedName { name }
            | DefineError::EmptyPattern { name }
            | DefineError::InvalidPattern { name, .. }
            | DefineError::MatchesEmpty { name } => Some(name),
        }
    }
}

/// A scan-time signal for the parser driving a [`Scanner`](crate::Scanner).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// [`Scanner::expect`](crate::Scanner::expect) read a token of another
    /// kind. The scanner has already moved past that token.
    #[error("expected token of kind {expected}, found {found} `{text}` at {span}")]
    UnexpectedTokenKind {
        expected: String,
        found: String,
        text: String,
        span: Span,
    },
}

impl ScanError {
    pub(crate) fn unexpected_kind(expected: &str, found: &Token<'_>) -> Self {
        ScanError::UnexpectedTokenKind {
            expected: expected.to_owned(),
            found: found.kind().to_owned(),
            text: found.text().to_owned(),
            span: found.span(),
        }
    }

    /// Source span of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnexpectedTokenKind { span, .. } => *span,
        }
    }

    /// Byte offset where the offending token starts.
    pub fn position(&self) -> usize {
        self.span().start
    }
}
