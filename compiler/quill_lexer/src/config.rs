//! Lexer configuration tables.

/// Tables describing the surface language.
///
/// `puncts` is order-sensitive: the lexer takes the first entry that prefixes
/// the remaining input, so every operator must be listed before any of its
/// proper prefixes (`>=` before `>`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexerConfig {
    pub puncts: Vec<String>,
    pub keywords: Vec<String>,
    pub line_comments: Vec<String>,
    /// `(open, close)` pairs. Block comments do not nest.
    pub block_comments: Vec<(String, String)>,
}

const QUILL_PUNCTS: &[&str] = &[
    "(", ")", "{", "}", ",", ".", ";", "-", "+", "*", "/", "==", "!=", "=", ">=", ">", "<=", "<",
    "!",
];

const QUILL_KEYWORDS: &[&str] = &[
    "var", "fun", "if", "else", "while", "for", "return", "and", "or", "true", "false",
];

impl LexerConfig {
    /// An empty configuration: every non-literal character is invalid.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard Quill tables.
    pub fn quill() -> Self {
        LexerConfig {
            puncts: QUILL_PUNCTS.iter().map(|&p| p.to_owned()).collect(),
            keywords: QUILL_KEYWORDS.iter().map(|&k| k.to_owned()).collect(),
            line_comments: vec!["//".to_owned()],
            block_comments: vec![("/*".to_owned(), "*/".to_owned())],
        }
    }

    #[must_use]
    pub fn with_puncts<I, S>(mut self, puncts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.puncts = puncts.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_line_comment(mut self, marker: impl Into<String>) -> Self {
        self.line_comments.push(marker.into());
        self
    }

    #[must_use]
    pub fn with_block_comment(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.block_comments.push((open.into(), close.into()));
        self
    }

    /// First punctuation entry that prefixes `rest`.
    pub(crate) fn match_punct(&self, rest: &str) -> Option<usize> {
        self.puncts
            .iter()
            .find(|p| !p.is_empty() && rest.starts_with(p.as_str()))
            .map(String::len)
    }

    pub(crate) fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }
}
