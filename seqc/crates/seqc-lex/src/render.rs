//! Token stream rendering and reading.
//!
//! [`TokenRenderer`] writes scanner output to two sinks: accepted tokens go to
//! the token sink, rejected tokens and scanner diagnostics go to the
//! diagnostic sink. Console and file output use the same renderer with
//! different writers.
//!
//! The text format has one token per line:
//!
//! ```text
//! <Keyword, "if">
//! <Left Parenthesis, "(">
//! <Identifier, "x">
//! ```
//!
//! [`read_token_stream`] reads that format back for downstream tools.
//!
//! # Example
//!
//! ```
//! use seqc_lex::render::{read_token_stream, RenderFormat, TokenRenderer};
//! use seqc_lex::{Lexer, TokenKind};
//! use seqc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut renderer = TokenRenderer::new(Vec::new(), Vec::new(), RenderFormat::Text);
//! for token in Lexer::new("report(x)", &handler) {
//!     renderer.render_token(&token).unwrap();
//! }
//!
//! let (tokens, _) = renderer.into_inner();
//! let stream = read_token_stream(tokens.as_slice()).unwrap();
//! assert_eq!(stream.len(), 4);
//! assert_eq!(stream[0].kind, TokenKind::Keyword);
//! assert_eq!(stream[2].lexeme, "x");
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use seqc_util::{Diagnostic, DiagnosticCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::{Token, TokenKind};

/// Errors raised while reading a rendered token stream.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Line is not wrapped in `<` and `>`
    #[error("line {line}: expected `<TypeName, \"lexeme\">`")]
    MissingAngleBrackets {
        /// 1-based line number
        line: usize,
    },

    /// No `, ` between type name and lexeme
    #[error("line {line}: missing `, ` separator")]
    MissingSeparator {
        /// 1-based line number
        line: usize,
    },

    /// Lexeme is not enclosed in double quotes
    #[error("line {line}: lexeme is not quoted")]
    MissingQuotes {
        /// 1-based line number
        line: usize,
    },

    /// Type name is not one the renderer produces
    #[error("line {line}: unknown token type `{name}`")]
    UnknownTypeName {
        /// 1-based line number
        line: usize,
        /// The unrecognised name
        name: String,
    },

    /// Format name other than `text` or `json`
    #[error("unknown output format `{0}` (expected `text` or `json`)")]
    UnknownFormat(String),

    /// Underlying reader failed
    #[error("failed to read token stream: {0}")]
    Io(#[from] io::Error),
}

/// Token sink format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// `<TypeName, "lexeme">` lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for RenderFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(RenderFormat::Text),
            "json" => Ok(RenderFormat::Json),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFormat::Text => f.write_str("text"),
            RenderFormat::Json => f.write_str("json"),
        }
    }
}

/// Writes tokens and scanner diagnostics to a pair of sinks.
pub struct TokenRenderer<W, E> {
    tokens: W,
    diagnostics: E,
    format: RenderFormat,
    tokens_written: usize,
    warnings_written: usize,
}

impl<W: Write, E: Write> TokenRenderer<W, E> {
    /// Creates a renderer writing tokens to `tokens` and warnings to
    /// `diagnostics`.
    pub fn new(tokens: W, diagnostics: E, format: RenderFormat) -> Self {
        Self {
            tokens,
            diagnostics,
            format,
            tokens_written: 0,
            warnings_written: 0,
        }
    }

    /// Renders one token.
    ///
    /// Accepted tokens go to the token sink, `Unknown` tokens become a
    /// warning on the diagnostic sink, and the end-of-input token writes
    /// nothing.
    pub fn render_token(&mut self, token: &Token<'_>) -> io::Result<()> {
        match token.kind {
            TokenKind::EndOfFile => Ok(()),
            TokenKind::Unknown(_) => {
                self.warnings_written += 1;
                writeln!(
                    self.diagnostics,
                    "Warning -- Unknown token: \"{}\"",
                    token.lexeme
                )
            },
            _ => {
                self.tokens_written += 1;
                match self.format {
                    RenderFormat::Text => writeln!(self.tokens, "{}", token),
                    RenderFormat::Json => {
                        serde_json::to_writer(&mut self.tokens, token)?;
                        writeln!(self.tokens)
                    },
                }
            },
        }
    }

    /// Renders a diagnostic drained from the scanner's handler.
    ///
    /// Unknown-character warnings use the `Warning: Unknown character: c`
    /// form; anything else is written as `Title: message`.
    pub fn render_diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        if !diagnostic.level.is_error() {
            self.warnings_written += 1;
        }
        if diagnostic.has_code(DiagnosticCode::W_LEX_UNKNOWN_CHAR) {
            writeln!(self.diagnostics, "Warning: {}", diagnostic.message)
        } else {
            writeln!(
                self.diagnostics,
                "{}: {}",
                diagnostic.level.title(),
                diagnostic.message
            )
        }
    }

    /// Number of accepted tokens written so far.
    pub fn tokens_written(&self) -> usize {
        self.tokens_written
    }

    /// Number of warnings written so far.
    pub fn warnings_written(&self) -> usize {
        self.warnings_written
    }

    /// Flushes both sinks.
    pub fn flush(&mut self) -> io::Result<()> {
        self.tokens.flush()?;
        self.diagnostics.flush()
    }

    /// Returns the token and diagnostic sinks.
    pub fn into_inner(self) -> (W, E) {
        (self.tokens, self.diagnostics)
    }
}

/// An owned token read back from a rendered stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedToken {
    /// Token kind decoded from the type name
    pub kind: TokenKind,
    /// Lexeme between the quotes
    pub lexeme: String,
}

impl From<Token<'_>> for RenderedToken {
    fn from(token: Token<'_>) -> Self {
        Self {
            kind: token.kind,
            lexeme: token.lexeme.to_string(),
        }
    }
}

/// Parses a single `<TypeName, "lexeme">` line.
///
/// Errors report line 1; [`read_token_stream`] reports the real line.
///
/// ```
/// use seqc_lex::render::parse_line;
/// use seqc_lex::TokenKind;
///
/// let token = parse_line(r#"<Right Curly Brace, "}">"#).unwrap();
/// assert_eq!(token.kind, TokenKind::RightBrace);
/// assert_eq!(token.lexeme, "}");
/// ```
pub fn parse_line(line: &str) -> Result<RenderedToken, RenderError> {
    parse_numbered_line(line, 1)
}

fn parse_numbered_line(line: &str, number: usize) -> Result<RenderedToken, RenderError> {
    let body = line
        .trim_end_matches(['\r', '\n'])
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .ok_or(RenderError::MissingAngleBrackets { line: number })?;

    let (name, quoted) = body
        .split_once(", ")
        .ok_or(RenderError::MissingSeparator { line: number })?;

    let lexeme = quoted
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(RenderError::MissingQuotes { line: number })?;

    let kind = TokenKind::from_display_name(name).ok_or_else(|| RenderError::UnknownTypeName {
        line: number,
        name: name.to_string(),
    })?;

    Ok(RenderedToken {
        kind,
        lexeme: lexeme.to_string(),
    })
}

/// Reads a whole rendered token stream. Blank lines are skipped.
pub fn read_token_stream(reader: impl BufRead) -> Result<Vec<RenderedToken>, RenderError> {
    let mut tokens = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        tokens.push(parse_numbered_line(&line, index + 1)?);
    }
    Ok(tokens)
}
