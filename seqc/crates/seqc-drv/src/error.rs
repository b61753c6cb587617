//! Error handling for the seqc driver.
//!
//! Lexical faults are not errors of the scanner itself; they surface here
//! only as [`SeqcError::LexicalFaults`] once the whole token stream has been
//! written, so that the binary can turn them into a failing exit status.

use std::path::PathBuf;

use seqc_lex::RenderError;
use thiserror::Error;

/// Main error type for the seqc driver.
#[derive(Error, Debug)]
pub enum SeqcError {
    /// Configuration could not be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A file could not be opened, read or created.
    #[error("Could not open `{}`", .path.display())]
    Io {
        /// The file involved
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Writing the token stream or diagnostics failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Invalid format name or malformed rendered stream.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// JSON configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The scan completed but reported at least one fault.
    #[error("Scanner encountered an error during lexical analysis")]
    LexicalFaults {
        /// Number of faults recorded
        faults: usize,
    },
}

/// Result type alias using SeqcError.
pub type Result<T> = std::result::Result<T, SeqcError>;
