//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use seqc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
///
/// let diag = DiagnosticBuilder::new(Level::Warning, "Unknown character: $")
///     .code(DiagnosticCode::W_LEX_UNKNOWN_CHAR)
///     .help("remove the character or quote it")
///     .build();
///
/// assert_eq!(diag.level, Level::Warning);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until `build` or `emit` is called"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    ///
    /// Notes provide additional context about the diagnostic.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    ///
    /// Helps provide actionable suggestions for fixing the issue.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build the diagnostic and hand it to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_error() {
        let diag = DiagnosticBuilder::error("test error").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test error");
    }

    #[test]
    fn test_builder_with_code_notes_and_helps() {
        let diag = DiagnosticBuilder::warning("Unknown character: @")
            .code(DiagnosticCode::W_LEX_UNKNOWN_CHAR)
            .note("the scanner skipped it")
            .help("remove it")
            .build();

        assert_eq!(diag.code, Some(DiagnosticCode::W_LEX_UNKNOWN_CHAR));
        assert_eq!(diag.notes, vec!["the scanner skipped it"]);
        assert_eq!(diag.helps, vec!["remove it"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::warning("first").emit(&handler);
        DiagnosticBuilder::error("second").emit(&handler);

        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
        assert_eq!(handler.diagnostics()[0].message, "first");
        assert!(handler.diagnostics()[1].level.is_error());
    }
}
