//! Terminal Emitter
//!
//! Human-readable diagnostic output with source snippets:
//!
//! ```text
//! error[L0001]: unrecognized input `#@`
//!   --> input.txt:1:3
//!   |
//! 1 | a #@ b
//!   |   ^^ no token definition matches here
//! ```

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::{ColorMode, DiagnosticEmitter};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Terminal emitter for diagnostics about one source buffer.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    path: String,
    source: &'s str,
    lines: LineOffsetTable,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    /// Create a terminal emitter.
    ///
    /// `path` is only used for display in `-->` location lines.
    pub fn new(
        writer: W,
        path: impl Into<String>,
        source: &'s str,
        mode: ColorMode,
        is_tty: bool,
    ) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.enabled(is_tty),
            path: path.into(),
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    /// Location line, source line, and underline for one label.
    fn write_label(&mut self, label: &Label) {
        let (line, col) = self.lines.offset_to_line_col(self.source, label.span.start);
        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = writeln!(self.writer, "  {marker} {}:{line}:{col}", self.path);

        let Some(text) = self.lines.line_text(self.source, line) else {
            return;
        };
        let line_start = self.lines.line_start_offset(line).unwrap_or(0);
        let underline_end = label.span.end.min(line_start + text.len());
        let width = self
            .source
            .get(label.span.start..underline_end)
            .map_or(0, |s| s.chars().count())
            .max(1);

        let gutter = line.to_string().len();
        let pad = col - 1;
        let _ = writeln!(self.writer, "{:>gutter$} |", "");
        let _ = writeln!(self.writer, "{line:>gutter$} | {text}");
        let _ = write!(self.writer, "{:>gutter$} | {:pad$}", "", "");

        let (mark, color) = if label.is_primary {
            ("^", colors::ERROR)
        } else {
            ("-", colors::SECONDARY)
        };
        let underline = format!("{} {}", mark.repeat(width), label.message);
        self.write_colored(&underline, color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };

            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {} warning{} emitted",
                    warning_count,
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {} warning{} emitted",
                warning_count,
                plural_s(warning_count)
            );
        }
    }
}
