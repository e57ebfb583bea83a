//! Lexer and parser configuration
//!
//! Everything here is read-only once built and owned by the lexer or
//! parser instance that uses it, so independent calls never share state.

use rustc_hash::FxHashMap;

use super::syntax_kind::SyntaxKind;

/// Reserved words of the diagram language
pub const RESERVED_WORDS: [(&str, SyntaxKind); 6] = [
    ("actor", SyntaxKind::ACTOR_KW),
    ("usecase", SyntaxKind::USECASE_KW),
    ("package", SyntaxKind::PACKAGE_KW),
    ("as", SyntaxKind::AS_KW),
    ("includes", SyntaxKind::INCLUDES_KW),
    ("extends", SyntaxKind::EXTENDS_KW),
];

/// Exact-spelling lookup that refines identifiers into keyword kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    words: FxHashMap<&'static str, SyntaxKind>,
}

impl KeywordTable {
    /// A table with no reserved words (every word lexes as `IDENT`)
    pub fn empty() -> Self {
        Self {
            words: FxHashMap::default(),
        }
    }

    /// Look up the keyword kind for an identifier spelling
    pub fn lookup(&self, ident: &str) -> Option<SyntaxKind> {
        self.words.get(ident).copied()
    }

    /// Refine an identifier: its keyword kind, or `IDENT`
    pub fn classify(&self, ident: &str) -> SyntaxKind {
        self.lookup(ident).unwrap_or(SyntaxKind::IDENT)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        RESERVED_WORDS.into_iter().collect()
    }
}

impl FromIterator<(&'static str, SyntaxKind)> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = (&'static str, SyntaxKind)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// What the lexer does with a character no token pattern accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnknownCharPolicy {
    /// Abort the whole tokenization with a `LexicalError`
    #[default]
    Fail,
    /// Skip the character, keep scanning, and report it afterwards
    Skip,
}

/// Lexer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerOptions {
    pub keywords: KeywordTable,
    pub on_unknown: UnknownCharPolicy,
}

impl LexerOptions {
    /// Options for the skip-and-continue lexer variant
    pub fn lenient() -> Self {
        Self {
            on_unknown: UnknownCharPolicy::Skip,
            ..Self::default()
        }
    }
}

/// Default limit on package nesting
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Deepest allowed package nesting (the diagram body is depth 0)
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_all_reserved_words() {
        let table = KeywordTable::default();
        assert_eq!(table.len(), RESERVED_WORDS.len());
        assert_eq!(table.lookup("usecase"), Some(SyntaxKind::USECASE_KW));
        assert_eq!(table.lookup("extends"), Some(SyntaxKind::EXTENDS_KW));
    }

    #[test]
    fn test_lookup_is_exact_spelling() {
        let table = KeywordTable::default();
        assert_eq!(table.classify("Actor"), SyntaxKind::IDENT);
        assert_eq!(table.classify("actors"), SyntaxKind::IDENT);
        assert_eq!(table.classify("actor"), SyntaxKind::ACTOR_KW);
    }

    #[test]
    fn test_empty_table() {
        let table = KeywordTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.classify("package"), SyntaxKind::IDENT);
    }

    #[test]
    fn test_lenient_options() {
        let options = LexerOptions::lenient();
        assert_eq!(options.on_unknown, UnknownCharPolicy::Skip);
        assert_eq!(options.keywords, KeywordTable::default());
        assert_eq!(LexerOptions::default().on_unknown, UnknownCharPolicy::Fail);
    }
}
