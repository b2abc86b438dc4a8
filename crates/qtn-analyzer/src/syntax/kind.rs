use crate::syntax::ast::SourceRange;

/// Lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Str,
    Punctuation,
    Comment,
    Eof,
    Unknown,
}

/// A lexed token. Tokens are produced once per lex pass and never mutated.
///
/// For string literals `value` holds the unescaped content; for every other
/// kind it is the source slice verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub range: SourceRange,
}

impl Token {
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }
}
