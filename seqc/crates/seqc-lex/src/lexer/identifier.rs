//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a letter-led `[A-Za-z0-9_]` run and classifies it.
    ///
    /// The keyword lookup is exact and case-sensitive. This never fails.
    pub fn lex_identifier(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.eat_while(is_ident_continue);
        let lexeme = self.cursor.slice_from(start);

        let kind = if self.vocabulary.is_keyword(lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, lexeme)
    }
}
