//! Diagnostic codes for categorizing front-end errors and warnings.
//!
//! # Examples
//!
//! ```
//! use seqc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::W_LEX_UNKNOWN_CHAR;
//! assert_eq!(code.prefix(), "W");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "W1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors or "W" for warnings and `number` is zero-padded to four
/// digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "W1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL WARNING CODES (W1xxx)
    // =========================================================================

    /// W1001: Lexer - character that no token rule accepts
    pub const W_LEX_UNKNOWN_CHAR: Self = Self::new("W", 1001);
    /// W1002: Lexer - digit-led run containing non-digits
    pub const W_LEX_MALFORMED_NUMBER: Self = Self::new("W", 1002);
    /// W1003: Lexer - operator run outside the operator vocabulary
    pub const W_LEX_MALFORMED_OPERATOR: Self = Self::new("W", 1003);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
