//! Token definitions.
//!
//! A [`Token`] borrows its lexeme from the source it was scanned from. Tokens
//! carry no position information.

use std::fmt;

use seqc_util::DiagnosticCode;
use serde::{Serialize, Serializer};

/// Why a lexeme was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultCause {
    /// A digit-led run that contains a non-digit, e.g. `123abc`.
    MalformedNumber,
    /// An operator-character run outside the operator vocabulary, e.g. `=-`.
    MalformedOperator,
    /// A character no token rule accepts. Never produces a token.
    StrayCharacter,
}

impl FaultCause {
    /// Diagnostic code reported for this cause.
    pub const fn code(self) -> DiagnosticCode {
        match self {
            FaultCause::StrayCharacter => DiagnosticCode::W_LEX_UNKNOWN_CHAR,
            FaultCause::MalformedNumber => DiagnosticCode::W_LEX_MALFORMED_NUMBER,
            FaultCause::MalformedOperator => DiagnosticCode::W_LEX_MALFORMED_OPERATOR,
        }
    }

    /// Short lowercase description.
    pub const fn describe(self) -> &'static str {
        match self {
            FaultCause::MalformedNumber => "malformed number",
            FaultCause::MalformedOperator => "malformed operator",
            FaultCause::StrayCharacter => "stray character",
        }
    }
}

impl fmt::Display for FaultCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word from the keyword vocabulary
    Keyword,
    /// Letter-led name that is not a keyword
    Identifier,
    /// Run of decimal digits
    Number,
    /// Lexeme from the operator vocabulary
    Operator,
    /// End of input; the lexeme is empty
    EndOfFile,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `:`
    Colon,
    /// `"`
    Quote,
    /// `,`
    Comma,
    /// Rejected lexeme, tagged with the reason
    Unknown(FaultCause),
}

impl TokenKind {
    /// Every kind that appears in a rendered token stream.
    pub const RENDERABLE: [TokenKind; 11] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Colon,
        TokenKind::Quote,
        TokenKind::Comma,
    ];

    /// Name used in the rendered token stream.
    ///
    /// # Example
    ///
    /// ```
    /// use seqc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::LeftBrace.display_name(), "Left Curly Brace");
    /// assert_eq!(TokenKind::Quote.display_name(), "Quotation");
    /// ```
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::EndOfFile => "End of File",
            TokenKind::LeftParen => "Left Parenthesis",
            TokenKind::RightParen => "Right Parenthesis",
            TokenKind::LeftBrace => "Left Curly Brace",
            TokenKind::RightBrace => "Right Curly Brace",
            TokenKind::Colon => "Colon",
            TokenKind::Quote => "Quotation",
            TokenKind::Comma => "Comma",
            TokenKind::Unknown(_) => "Unknown",
        }
    }

    /// Inverse of [`display_name`](Self::display_name) for renderable kinds.
    pub fn from_display_name(name: &str) -> Option<TokenKind> {
        Self::RENDERABLE
            .into_iter()
            .find(|kind| kind.display_name() == name)
    }

    /// Kind of a fixed single-character punctuation token.
    pub fn punctuation(c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ':' => TokenKind::Colon,
            '"' => TokenKind::Quote,
            ',' => TokenKind::Comma,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for `Unknown` kinds.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, TokenKind::Unknown(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// A classified lexeme.
///
/// # Example
///
/// ```
/// use seqc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Keyword, "report");
/// assert_eq!(token.to_string(), r#"<Keyword, "report">"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    /// Classification
    pub kind: TokenKind,
    /// Exact source text consumed, including for rejected lexemes
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub const fn new(kind: TokenKind, lexeme: &'a str) -> Self {
        Self { kind, lexeme }
    }

    /// The end-of-input token.
    pub const fn eof() -> Self {
        Self::new(TokenKind::EndOfFile, "")
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfFile)
    }

    /// The fault carried by an `Unknown` token.
    ///
    /// ```
    /// use seqc_lex::{FaultCause, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Unknown(FaultCause::MalformedNumber), "9z");
    /// let fault = token.fault().unwrap();
    /// assert_eq!(fault.cause, FaultCause::MalformedNumber);
    /// assert_eq!(fault.lexeme, "9z");
    /// assert!(Token::new(TokenKind::Number, "9").fault().is_none());
    /// ```
    pub fn fault(&self) -> Option<LexFault<'a>> {
        match self.kind {
            TokenKind::Unknown(cause) => Some(LexFault::new(cause, self.lexeme)),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    /// Rendered form `<TypeName, "lexeme">`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, \"{}\">", self.kind.display_name(), self.lexeme)
    }
}

/// A recorded lexical fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexFault<'a> {
    /// What went wrong
    pub cause: FaultCause,
    /// Offending source text
    pub lexeme: &'a str,
}

impl<'a> LexFault<'a> {
    /// Creates a fault record.
    pub const fn new(cause: FaultCause, lexeme: &'a str) -> Self {
        Self { cause, lexeme }
    }
}

impl fmt::Display for LexFault<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.cause, self.lexeme)
    }
}
