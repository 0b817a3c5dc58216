//! Rendering scan diagnostics for people.
//!
//! [`TerminalEmitter`] is the only renderer: a header line, the offending
//! source line, and a caret underline per label. The [`DiagnosticEmitter`]
//! trait is the seam a tool can implement to route reports elsewhere.

mod terminal;

pub use terminal::TerminalEmitter;

use crate::{Diagnostic, Severity};

/// Sink for diagnostics about one source buffer.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn flush(&mut self);

    /// Closing "aborting due to ..." line; nothing when both counts are zero.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);

    /// Emit in order, without a summary.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Emit a whole scan report: every diagnostic, then the summary counted
    /// from their severities, then flush. Returns the error count.
    fn emit_report(&mut self, diagnostics: &[Diagnostic]) -> usize {
        self.emit_all(diagnostics);
        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        let warnings = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        self.emit_summary(errors, warnings);
        self.flush();
        errors
    }
}

/// Whether the terminal emitter writes ANSI color codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` is consulted only in `Auto` mode.
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
