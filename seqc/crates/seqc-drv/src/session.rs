//! A single scanning run: one source file, one token stream.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use seqc_lex::{Lexer, RenderFormat, TokenRenderer};
use seqc_util::Handler;
use tracing::{debug, info};

use crate::error::{Result, SeqcError};

/// Counts gathered while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Accepted tokens written to the token sink
    pub tokens: usize,
    /// Warnings written to the diagnostic sink
    pub warnings: usize,
    /// Faults recorded by the scanner
    pub faults: usize,
    /// Final value of the scanner's fault flag
    pub has_error: bool,
}

impl ScanReport {
    /// Turns a faulty scan into [`SeqcError::LexicalFaults`].
    pub fn into_result(self) -> Result<Self> {
        if self.has_error {
            Err(SeqcError::LexicalFaults {
                faults: self.faults,
            })
        } else {
            Ok(self)
        }
    }
}

/// A loaded source file together with the output format.
#[derive(Debug, Clone)]
pub struct Session {
    input: PathBuf,
    source: String,
    format: RenderFormat,
}

impl Session {
    /// Reads `input` completely into memory.
    pub fn open(input: impl Into<PathBuf>, format: RenderFormat) -> Result<Self> {
        let input = input.into();
        let source = std::fs::read_to_string(&input).map_err(|source| SeqcError::Io {
            path: input.clone(),
            source,
        })?;
        debug!(path = %input.display(), bytes = source.len(), "read source");
        Ok(Self::from_source(input, source, format))
    }

    /// Wraps source text that is already in memory.
    pub fn from_source(
        input: impl Into<PathBuf>,
        source: impl Into<String>,
        format: RenderFormat,
    ) -> Self {
        Self {
            input: input.into(),
            source: source.into(),
            format,
        }
    }

    /// Path the source was read from.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Scans the source, writing tokens to `tokens` and warnings to
    /// `diagnostics` as they are produced.
    ///
    /// Warnings raised while looking for a token are written before that
    /// token, so both sinks follow source order.
    pub fn scan<W: Write, E: Write>(&self, tokens: W, diagnostics: E) -> Result<ScanReport> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&self.source, &handler);
        let mut renderer = TokenRenderer::new(tokens, diagnostics, self.format);

        loop {
            let token = lexer.next_token();
            for diagnostic in handler.take_diagnostics() {
                renderer.render_diagnostic(&diagnostic)?;
            }
            renderer.render_token(&token)?;
            if token.is_eof() {
                break;
            }
        }
        renderer.flush()?;

        for fault in lexer.faults() {
            debug!(code = %fault.cause.code(), lexeme = fault.lexeme, "{}", fault.cause);
        }

        Ok(ScanReport {
            tokens: renderer.tokens_written(),
            warnings: renderer.warnings_written(),
            faults: lexer.faults().len(),
            has_error: lexer.has_error(),
        })
    }

    /// Scans to `output`, or to stdout when `output` is `None`. Warnings
    /// always go to stderr.
    pub fn run(&self, output: Option<&Path>) -> Result<ScanReport> {
        let stderr = io::stderr();
        match output {
            Some(path) => {
                let file = File::create(path).map_err(|source| SeqcError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!(path = %path.display(), "writing tokens");
                self.scan(BufWriter::new(file), stderr.lock())
            },
            None => self.scan(io::stdout().lock(), stderr.lock()),
        }
    }
}
