//! Character classification for the scanner.
//!
//! Every predicate here is ASCII-only. A non-ASCII character is never
//! whitespace, never a digit or letter and never an operator character, so
//! the dispatcher reports it as a single stray character.

/// Checks if a character is whitespace.
///
/// The accepted set is the one C `isspace` recognises in the "C" locale:
/// space, horizontal tab, newline, carriage return, vertical tab and form feed.
///
/// # Example
///
/// ```
/// use seqc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{00A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is an ASCII letter. Only letters start an identifier.
///
/// # Example
///
/// ```
/// use seqc_lex::chars::is_letter;
///
/// assert!(is_letter('r'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('α'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character may continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Checks if a character belongs to a digit-led run.
///
/// The run is wider than a valid number so that `123abc` is consumed whole
/// and rejected as one lexeme. Underscore is not part of the run.
#[inline]
pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Checks if a character can appear in an operator run.
///
/// # Example
///
/// ```
/// use seqc_lex::chars::is_operator_char;
///
/// assert!(is_operator_char('='));
/// assert!(is_operator_char('|'));
/// assert!(!is_operator_char('%'));
/// ```
#[inline]
pub fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '=' | '!' | '>' | '<' | '&' | '|')
}

/// Checks if a character is one of the fixed single-character punctuation
/// marks `( ) { } : " ,`.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | ':' | '"' | ',')
}
