//! Whitespace and comment skipping.

use crate::chars::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and `//` line comments.
    ///
    /// A comment only starts where a token could start; `//` inside an
    /// operator run such as `=//` belongs to the run.
    pub fn skip_whitespace_and_comments(&mut self) {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == '/' && self.cursor.peek_char(1) == '/' {
                self.skip_line_comment();
            } else if is_whitespace(c) {
                self.cursor.advance();
            } else {
                return;
            }
        }
    }

    /// Skips a line comment up to, not including, the next newline.
    ///
    /// An unterminated comment at the end of input simply stops there.
    pub fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
