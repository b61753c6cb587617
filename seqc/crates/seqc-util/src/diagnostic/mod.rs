//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and reporting
//! front-end diagnostics (errors, warnings, notes, and help messages).
//!
//! Diagnostics carry no source location. The scanner does not track
//! line or column information, so a diagnostic is identified by its
//! level, its optional code and its message alone.
//!
//! # Examples
//!
//! ```
//! use seqc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("Unknown character: @")
//!     .code(DiagnosticCode::W_LEX_UNKNOWN_CHAR)
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use seqc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(Level::Warning.title(), "Warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that makes the input invalid
    Error,
    /// A suspicious construct; processing continues
    Warning,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Capitalised label used in console output (`Warning`, `Error`, ...).
    pub const fn title(&self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and optional code
///
/// # Examples
///
/// ```
/// use seqc_util::diagnostic::{Diagnostic, Level};
///
/// let diag = Diagnostic::error("something went wrong");
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Returns true if this diagnostic carries the given code.
    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.code == Some(code)
    }
}

impl fmt::Display for Diagnostic {
    /// Formats as `level[CODE]: message`, followed by one indented line per
    /// note and help.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The handler uses interior mutability so that a scanner can hold a shared
/// reference to it while the caller drains what has been reported so far.
/// It is deliberately `!Sync`; one handler serves one scanning pass.
///
/// # Examples
///
/// ```
/// use seqc_util::diagnostic::{Diagnostic, Handler};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("Unknown character: #"));
///
/// let drained = handler.take_diagnostics();
/// assert_eq!(drained.len(), 1);
/// assert!(handler.diagnostics().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get a snapshot of all pending diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return every pending diagnostic, in emission order.
    ///
    /// Used by the driver after each token request so that diagnostics are
    /// printed interleaved with the token stream.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_level_title() {
        assert_eq!(Level::Error.title(), "Error");
        assert_eq!(Level::Warning.title(), "Warning");
        assert!(Level::Error.is_error());
        assert!(!Level::Warning.is_error());
    }

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Level::Error, "test");
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test");
        assert!(diag.code.is_none());
    }

    #[test]
    fn test_diagnostic_with_code() {
        let code = DiagnosticCode::new("W", 1001);
        let diag = Diagnostic::warning("test").with_code(code);
        assert_eq!(diag.code, Some(code));
        assert!(diag.has_code(code));
        assert!(!diag.has_code(DiagnosticCode::W_LEX_MALFORMED_NUMBER));
    }

    #[test]
    fn test_diagnostic_with_note_and_help() {
        let diag = Diagnostic::error("test")
            .with_note("note 1")
            .with_help("help 1");
        assert_eq!(diag.notes, vec!["note 1"]);
        assert_eq!(diag.helps, vec!["help 1"]);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("Unknown character: @")
            .with_code(DiagnosticCode::W_LEX_UNKNOWN_CHAR)
            .with_help("remove the character");
        assert_eq!(
            diag.to_string(),
            "warning[W1001]: Unknown character: @\n  = help: remove the character"
        );
        assert_eq!(Diagnostic::error("boom").to_string(), "error: boom");
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert_eq!(handler.warning_count(), 0);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test1"));
        handler.emit_diagnostic(Diagnostic::warning("test2"));
        handler.emit_diagnostic(Diagnostic::warning("test3"));

        assert_eq!(handler.warning_count(), 2);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_take_preserves_order() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::warning("first"));
        handler.emit_diagnostic(Diagnostic::warning("second"));

        let drained = handler.take_diagnostics();
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].message, "second");
        assert!(handler.take_diagnostics().is_empty());
    }
}
