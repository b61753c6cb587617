//! seqc-drv - Driver for the seqc Lexical Front End
//!
//! Reads a source file, runs the scanner over it and writes the rendered
//! token stream. The `seqc` binary is a thin layer over this library that
//! adds argument parsing and logging setup.

pub mod config;
pub mod error;
pub mod session;

pub use config::Config;
pub use error::{Result, SeqcError};
pub use session::{ScanReport, Session};
