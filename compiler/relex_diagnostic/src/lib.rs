//! Diagnostics for relex token streams.
//!
//! The lexer never fails on bad input: unrecognized text becomes an
//! `UNEXPECTED` token and `Scanner::expect` mismatches come back as
//! [`ScanError`](relex_core::ScanError) values. This crate turns both into
//! [`Diagnostic`]s with error codes, labels, and notes, and renders them
//! with source snippets through a [`TerminalEmitter`](emitter::TerminalEmitter).
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{
    collect_unexpected, from_scan_error, unexpected_input, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;
