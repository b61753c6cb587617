//! Lexer module.
//!
//! The scanner is split into focused components that all extend [`Lexer`]:
//! - `core` - Lexer struct, dispatch loop and fault tracking
//! - `comment` - whitespace and line-comment skipping
//! - `identifier` - identifier and keyword lexing
//! - `number` - digit-run lexing
//! - `operator` - operator-run lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use core::Lexer;
