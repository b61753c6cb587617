//! Number lexing.
//!
//! Numbers are plain decimal digit runs. The scanner first takes the whole
//! alphanumeric run and only then checks it, so `123abc` is rejected as a
//! single lexeme rather than split into `123` and `abc`.

use crate::chars::{is_digit, is_number_continue};
use crate::token::{FaultCause, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a digit-led run starting at the current position.
    ///
    /// Returns `Number` if every character is a digit and
    /// `Unknown(MalformedNumber)` carrying the full run otherwise.
    pub fn lex_number(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.eat_while(is_number_continue);
        let lexeme = self.cursor.slice_from(start);

        if lexeme.chars().all(is_digit) {
            Token::new(TokenKind::Number, lexeme)
        } else {
            self.record_fault(FaultCause::MalformedNumber, lexeme);
            Token::new(TokenKind::Unknown(FaultCause::MalformedNumber), lexeme)
        }
    }
}
