//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop and the
//! sticky fault tracking shared by the sub-scanners.

use seqc_util::{DiagnosticBuilder, Handler};

use crate::chars::{is_digit, is_letter, is_operator_char};
use crate::cursor::Cursor;
use crate::token::{FaultCause, LexFault, Token, TokenKind};
use crate::vocab::Vocabulary;

/// Lexer for the sequence-generation language.
///
/// The lexer turns a fully buffered source string into tokens on demand.
/// Malformed lexemes never stop it: they come back as
/// [`TokenKind::Unknown`] tokens, stray characters are reported to the
/// [`Handler`], and either sets a flag that stays set for the rest of the
/// pass.
///
/// # Example
///
/// ```
/// use seqc_lex::{Lexer, TokenKind};
/// use seqc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("report x == 1", &handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Keyword);
/// assert_eq!(lexer.next_token().lexeme, "x");
/// assert_eq!(lexer.next_token().kind, TokenKind::Operator);
/// assert_eq!(lexer.next_token().kind, TokenKind::Number);
/// assert!(lexer.next_token().is_eof());
/// assert!(!lexer.has_error());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Keyword and operator tables.
    pub(crate) vocabulary: &'a Vocabulary,

    /// Sink for stray-character warnings.
    handler: &'a Handler,

    /// Sticky fault flag. Never reset once set.
    faulted: bool,

    /// Every fault seen so far, in source order.
    faults: Vec<LexFault<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` using the standard vocabulary.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_vocabulary(source, Vocabulary::standard(), handler)
    }

    /// Creates a lexer over `source` with a caller-supplied vocabulary.
    pub fn with_vocabulary(
        source: &'a str,
        vocabulary: &'a Vocabulary,
        handler: &'a Handler,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            vocabulary,
            handler,
            faulted: false,
            faults: Vec::new(),
        }
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace and `//` comments are skipped, stray characters are
    /// reported and skipped, and the first character that starts a token
    /// decides which sub-scanner runs. Once the input is exhausted every call
    /// returns [`Token::eof`] without touching any state.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            self.skip_whitespace_and_comments();

            if self.cursor.is_at_end() {
                return Token::eof();
            }

            let c = self.cursor.current_char();
            if is_digit(c) {
                return self.lex_number();
            }
            if is_letter(c) {
                return self.lex_identifier();
            }
            if is_operator_char(c) {
                return self.lex_operator();
            }
            if let Some(kind) = TokenKind::punctuation(c) {
                let start = self.cursor.position();
                self.cursor.advance();
                return Token::new(kind, self.cursor.slice_from(start));
            }

            self.skip_stray_char(c);
        }
    }

    /// Reports `c` as an unknown character and steps over it.
    fn skip_stray_char(&mut self, c: char) {
        let start = self.cursor.position();
        self.cursor.advance();
        let lexeme = self.cursor.slice_from(start);

        DiagnosticBuilder::warning(format!("Unknown character: {}", c))
            .code(FaultCause::StrayCharacter.code())
            .emit(self.handler);
        self.record_fault(FaultCause::StrayCharacter, lexeme);
    }

    /// Sets the fault flag and remembers the offending lexeme.
    pub(crate) fn record_fault(&mut self, cause: FaultCause, lexeme: &'a str) {
        self.faulted = true;
        self.faults.push(LexFault::new(cause, lexeme));
    }

    /// Returns true if any fault has been seen so far.
    pub fn has_error(&self) -> bool {
        self.faulted
    }

    /// Every fault seen so far, in source order.
    pub fn faults(&self) -> &[LexFault<'a>] {
        &self.faults
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Drains the remaining tokens, excluding the end-of-input token.
    ///
    /// # Example
    ///
    /// ```
    /// use seqc_lex::{Lexer, TokenKind};
    /// use seqc_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let tokens = Lexer::new("set_seq_attr(a, 3)", &handler).tokenize();
    /// assert_eq!(tokens.len(), 6);
    /// assert_eq!(tokens[1].kind, TokenKind::LeftParen);
    /// ```
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        self.by_ref().collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
