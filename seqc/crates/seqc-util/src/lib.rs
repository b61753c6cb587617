//! seqc-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the seqc front end:
//!
//! - [`diagnostic`] - diagnostic levels, codes, builder and the collecting
//!   [`Handler`] that scanners report into
//! - the fast hash set re-exported from `rustc-hash`
//!
//! The scanner never aborts on a lexical fault. Instead it records a
//! [`Diagnostic`] into a [`Handler`] and carries on; the driver drains the
//! handler and decides how to present what was collected.

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};

// Re-export commonly used types
pub use rustc_hash::FxHashSet;
