//! Operator lexing.
//!
//! Operators are lexed greedily: the whole run of operator characters is
//! taken and then looked up as a single lexeme. There is no backtracking, so
//! `=-` is one rejected lexeme while `= -` is two operators.

use crate::chars::is_operator_char;
use crate::token::{FaultCause, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal operator-character run starting at the current
    /// position.
    pub fn lex_operator(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.eat_while(is_operator_char);
        let lexeme = self.cursor.slice_from(start);

        if self.vocabulary.is_operator(lexeme) {
            Token::new(TokenKind::Operator, lexeme)
        } else {
            self.record_fault(FaultCause::MalformedOperator, lexeme);
            Token::new(TokenKind::Unknown(FaultCause::MalformedOperator), lexeme)
        }
    }
}
