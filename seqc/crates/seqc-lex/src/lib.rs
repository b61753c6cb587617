//! seqc-lex - Lexical Analyzer for the Sequence-Generation Language
//!
//! This crate turns the source text of a sequence-generation program
//! (`register_sequencial`, `begin_generate`/`end_generate`, `set_seq_attr`,
//! `report` and friends) into a flat stream of typed tokens for a
//! downstream parser.
//!
//! # Example Usage
//!
//! ```
//! use seqc_lex::{Lexer, Token, TokenKind};
//! use seqc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("if (x==10) { report }", &handler);
//!
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Keyword, "if"));
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::LeftParen, "("));
//!
//! // The rest, without the end-of-input token
//! let rest: Vec<Token> = lexer.collect();
//! assert_eq!(rest.len(), 7);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds, tokens and fault records
//! - [`lexer`] - the scanner: dispatch loop and sub-scanners
//! - [`cursor`] - bounded character cursor over the source
//! - [`chars`] - ASCII character classes
//! - [`vocab`] - keyword and operator vocabularies
//! - [`render`] - text/JSON rendering of token streams and reading them back
//!
//! # Scanning Rules
//!
//! At each token start the first character picks the rule:
//!
//! | First character | Run consumed | Result |
//! |---|---|---|
//! | digit | `[A-Za-z0-9]*` | `Number`, or `Unknown` if the run has a letter |
//! | letter | `[A-Za-z0-9_]*` | `Keyword` or `Identifier` |
//! | `+ - * / = ! > < & \|` | operator characters | `Operator`, or `Unknown` if not in the vocabulary |
//! | `( ) { } : " ,` | that character | punctuation token |
//! | whitespace, `//` | to end of line for comments | skipped |
//! | anything else | one character | skipped with a warning |
//!
//! Faults never stop the scan. [`Lexer::has_error`] reports whether any
//! happened.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod render;
pub mod token;
pub mod vocab;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use render::{RenderError, RenderFormat, RenderedToken, TokenRenderer};
pub use token::{FaultCause, LexFault, Token, TokenKind};
pub use vocab::Vocabulary;
