//! Keyword and operator vocabularies.
//!
//! A [`Vocabulary`] is built once and only read afterwards. The scanner holds
//! it by reference, so a test can hand in a custom one while normal callers
//! share the process-wide [`Vocabulary::standard`] instance.

use std::sync::LazyLock;

use seqc_util::FxHashSet;

/// Reserved words of the sequence-generation language.
pub const KEYWORDS: &[&str] = &[
    "register_sequencial",
    "for",
    "to",
    "begin_generate",
    "end_generate",
    "set_seq_attr",
    "register_op",
    "break",
    "report",
    "if",
    "else",
    "while",
    "return",
    "set_soc_attr",
    "generate_success",
    "true",
    "false",
];

/// Every operator lexeme the scanner accepts.
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "=", "==", "!=", ">=", "<=", ">", "<", "&&", "||",
];

static STANDARD: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new(KEYWORDS.iter().copied(), OPERATORS.iter().copied()));

/// Immutable lookup tables for keyword and operator classification.
///
/// # Example
///
/// ```
/// use seqc_lex::Vocabulary;
///
/// let vocab = Vocabulary::standard();
/// assert!(vocab.is_keyword("begin_generate"));
/// assert!(!vocab.is_keyword("Begin_generate"));
/// assert!(vocab.is_operator("!="));
/// assert!(!vocab.is_operator("=-"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    keywords: FxHashSet<&'static str>,
    operators: FxHashSet<&'static str>,
}

impl Vocabulary {
    /// Builds a vocabulary from keyword and operator lists.
    pub fn new(
        keywords: impl IntoIterator<Item = &'static str>,
        operators: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self {
            keywords: keywords.into_iter().collect(),
            operators: operators.into_iter().collect(),
        }
    }

    /// Returns the shared vocabulary of the language, built on first use.
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    /// Exact, case-sensitive keyword lookup.
    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Exact operator lookup.
    #[inline]
    pub fn is_operator(&self, op: &str) -> bool {
        self.operators.contains(op)
    }

    /// Number of keywords.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Number of operators.
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }
}
