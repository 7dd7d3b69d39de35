//! Diagnostic output for the CLI
//!
//! Everything that is not table data goes through a [`Logger`] so stdout
//! stays clean for piping. The logger is an ordinary value owned by `main`
//! and handed to the command layer; there is no process-wide log state.

use console::{style, Term};
use std::fmt::Display;
use std::io::Write;

/// Line-oriented logger with a fixed prefix
#[derive(Debug)]
pub struct Logger<W: Write = Term> {
    out: W,
    prefix: String,
    color: bool,
}

impl Logger<Term> {
    /// Logger writing to stderr, prefixed with the binary name
    #[must_use]
    pub fn stderr() -> Self {
        let color = console::colors_enabled_stderr();
        Self::new(Term::stderr(), crate::NAME).with_color(color)
    }
}

impl<W: Write> Logger<W> {
    /// Create a logger writing to `out` with prefix `"{name}> "`
    pub fn new(out: W, name: &str) -> Self {
        Self {
            out,
            prefix: format!("{name}> "),
            color: false,
        }
    }

    /// Enable or disable terminal styling of error lines
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write an informational line
    pub fn info(&mut self, msg: impl Display) {
        // A logger that cannot write has nowhere to report it.
        let _ = writeln!(self.out, "{}{msg}", self.prefix);
    }

    /// Write an error line
    pub fn error(&mut self, msg: impl Display) {
        let styled = style(msg).red().force_styling(self.color);
        let _ = writeln!(self.out, "{}{styled}", self.prefix);
    }

    /// Consume the logger, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
