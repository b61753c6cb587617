//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains a byte position
//! while iterating through source characters. The position only ever moves
//! forward, and every read is bounds-checked: reading past the end yields
//! `'\0'` instead of touching memory outside the source.
//!
//! The cursor keeps no line or column information.

/// A forward-only cursor over a fully buffered source string.
///
/// # Example
///
/// ```
/// use seqc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("if x");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'f');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character starting `offset` bytes past the current
    /// position, or '\0' when that is out of range.
    ///
    /// Offsets are in bytes, which is only meaningful for ASCII lookahead;
    /// the scanner never peeks further than the next byte.
    ///
    /// # Example
    ///
    /// ```
    /// use seqc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("//");
    /// assert_eq!(cursor.peek_char(1), '/');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Advances the cursor past the current character.
    ///
    /// Multi-byte UTF-8 characters are stepped over as a whole. Does nothing
    /// if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            return;
        }

        let width = self.current_char().len_utf8();
        self.position = (self.position + width).min(self.source.len());
    }

    /// Advances while `predicate` accepts the current character and input
    /// remains.
    ///
    /// # Example
    ///
    /// ```
    /// use seqc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.position(), 3);
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use seqc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("report x");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "report");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }

    /// Returns the remaining unconsumed source.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the whole source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
