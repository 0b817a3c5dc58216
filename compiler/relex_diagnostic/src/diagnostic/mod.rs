//! Core diagnostic types and constructors for scan problems.

use std::fmt;

use relex_core::{Lexer, ScanError, Span, Token, EOF};

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// The source location to highlight.
    pub span: Span,
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A structured report: code, severity, message, labels, and notes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with an empty message.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic::new(code, Severity::Error)
    }

    /// Create a warning diagnostic with an empty message.
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic::new(code, Severity::Warning)
    }

    fn new(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label.
    #[must_use]
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    #[must_use]
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

/// Diagnostic for an `UNEXPECTED` token.
pub fn unexpected_input(token: &Token<'_>) -> Diagnostic {
    debug_assert!(token.is_unexpected(), "not an UNEXPECTED token: {token:?}");
    Diagnostic::error(ErrorCode::L0001)
        .with_message(format!(
            "unrecognized input `{}`",
            token.text().escape_debug()
        ))
        .with_label(token.span(), "no token definition matches here")
}

/// Diagnostic for a failed `Scanner::expect`.
pub fn from_scan_error(err: &ScanError) -> Diagnostic {
    let ScanError::UnexpectedTokenKind {
        expected,
        found,
        text,
        span,
    } = err;

    let diagnostic = Diagnostic::error(ErrorCode::L0002);
    if found == EOF {
        diagnostic
            .with_message(format!(
                "unexpected end of input: expected {expected}"
            ))
            .with_label(*span, format!("expected {expected}"))
    } else {
        diagnostic
            .with_message(format!(
                "unexpected token: expected {expected}, found {found} `{}`",
                text.escape_debug()
            ))
            .with_label(*span, format!("expected {expected}"))
    }
}

/// Scan all of `source` and report every `UNEXPECTED` token, in order.
pub fn collect_unexpected(lexer: &Lexer, source: &str) -> Vec<Diagnostic> {
    lexer
        .tokenize(source)
        .iter()
        .filter(|token| token.is_unexpected())
        .map(unexpected_input)
        .collect()
}
