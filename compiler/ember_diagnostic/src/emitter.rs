//! Terminal emitter.
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::span_utils::{line_col, line_text};
use crate::{Diagnostic, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl TerminalEmitter<io::Stderr> {
    /// Create an emitter for stderr, with colors when stderr is a terminal.
    pub fn stderr() -> Self {
        let is_tty = io::IsTerminal::is_terminal(&io::stderr());
        TerminalEmitter {
            writer: io::stderr(),
            colors: is_tty,
        }
    }
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter.
    pub fn new(writer: W, colors: bool) -> Self {
        TerminalEmitter { writer, colors }
    }

    fn severity_color(&self, severity: Severity) -> &'static str {
        if !self.colors {
            return "";
        }
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        }
    }

    fn reset(&self) -> &'static str {
        if self.colors {
            colors::RESET
        } else {
            ""
        }
    }

    fn bold(&self) -> &'static str {
        if self.colors {
            colors::BOLD
        } else {
            ""
        }
    }

    /// Emit a single diagnostic against the source it was produced from.
    ///
    /// Renders the severity and message, then the `line:column` location
    /// and the offending source line with a caret underline when the
    /// diagnostic carries a span.
    pub fn emit(&mut self, diagnostic: &Diagnostic, source: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}{}{}: {}{}{}",
            self.severity_color(diagnostic.severity),
            diagnostic.severity,
            self.reset(),
            self.bold(),
            diagnostic.message,
            self.reset(),
        )?;

        if let Some(span) = diagnostic.span {
            let (line, column) = line_col(source, span.start);
            writeln!(self.writer, " --> line {line}:{column}")?;
            if let Some(text) = line_text(source, line) {
                writeln!(self.writer, "  | {text}")?;
                let pad = " ".repeat(column.saturating_sub(1) as usize);
                let width = (span.len().max(1) as usize).min(text.len().max(1));
                writeln!(self.writer, "  | {pad}{}", "^".repeat(width))?;
            }
        }
        Ok(())
    }

    /// Emit a batch of diagnostics followed by an error-count summary.
    pub fn emit_all(&mut self, diagnostics: &[Diagnostic], source: &str) -> io::Result<()> {
        for diagnostic in diagnostics {
            self.emit(diagnostic, source)?;
        }
        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        if errors > 0 {
            let plural = if errors == 1 { "" } else { "s" };
            writeln!(
                self.writer,
                "{}{} error{plural} reported{}",
                self.severity_color(Severity::Error),
                errors,
                self.reset(),
            )?;
        }
        Ok(())
    }

    /// Consume the emitter, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
