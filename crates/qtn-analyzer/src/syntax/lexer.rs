use logos::Logos;

use crate::qtn::builtins::keywords::is_reserved_word;
use crate::syntax::ast::SourceRange;
use crate::syntax::kind::{Token, TokenKind};
use crate::syntax::line_index::LineIndex;

/// Raw lexical classes recognized by logos. The public token stream is
/// produced by [`tokenize`], which layers keyword reclassification, the
/// `#pragma`/`#define` fold, and line/character ranges on top.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r"//[^\n]*", logos::skip)]
    #[token("/*", skip_block_comment)]
    Comment,

    #[token("\"", read_string)]
    Str(String),

    #[regex(r"-?0[xX][0-9a-fA-F]*")]
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[A-Za-z_@][A-Za-z0-9_@]*")]
    Ident,

    #[token("=>")]
    #[token("{")]
    #[token("}")]
    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token("<")]
    #[token(">")]
    #[token(":")]
    #[token(";")]
    #[token(",")]
    #[token("=")]
    #[token("*")]
    #[token("#")]
    #[token("?")]
    #[token(".")]
    Punct,
}

/// Consume a block comment to the closing `*/`, or to EOF when unterminated.
/// Unterminated comments are not a lexer error; the parser reports any
/// resulting missing tokens.
fn skip_block_comment(lex: &mut logos::Lexer<RawToken>) -> logos::Skip {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(rest.len()),
    }
    logos::Skip
}

/// Consume a string literal after its opening quote, returning the unescaped
/// content. Recognized escapes: `\n \t \r \\ \"`; any other escaped character
/// is stored literally. An unterminated literal consumes to EOF.
fn read_string(lex: &mut logos::Lexer<RawToken>) -> String {
    let rest = lex.remainder();
    let mut value = String::new();
    let mut chars = rest.char_indices();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => {
                lex.bump(i + 1);
                return value;
            }
            '\\' => match chars.next() {
                Some((_, esc)) => value.push(match esc {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    other => other,
                }),
                None => break,
            },
            other => value.push(other),
        }
    }

    lex.bump(rest.len());
    value
}

/// Tokenize QTN source text. Never fails and always terminates; the result
/// ends with exactly one EOF token positioned just past the last character.
pub fn tokenize(text: &str) -> Vec<Token> {
    let index = LineIndex::new(text);
    let mut tokens: Vec<Token> = Vec::new();
    // Byte offset where the previous token ended, for the directive fold.
    let mut prev_end = usize::MAX;

    let mut lex = RawToken::lexer(text);
    while let Some(result) = lex.next() {
        let span = lex.span();
        let range = index.range(span.start, span.end);

        let token = match result {
            Ok(RawToken::Str(value)) => Token {
                kind: TokenKind::Str,
                value,
                range,
            },
            Ok(RawToken::Number) => Token {
                kind: TokenKind::Number,
                value: lex.slice().to_string(),
                range,
            },
            Ok(RawToken::Ident) => {
                let value = lex.slice();
                // `#` immediately followed by `pragma`/`define` lexes as a
                // single directive keyword.
                if (value == "pragma" || value == "define")
                    && span.start == prev_end
                    && tokens.last().map(|t| t.is(TokenKind::Punctuation, "#")) == Some(true)
                {
                    if let Some(hash) = tokens.pop() {
                        prev_end = span.end;
                        tokens.push(Token {
                            kind: TokenKind::Keyword,
                            value: format!("#{value}"),
                            range: hash.range.join(range),
                        });
                        continue;
                    }
                }
                let kind = if is_reserved_word(value) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                Token {
                    kind,
                    value: value.to_string(),
                    range,
                }
            }
            Ok(RawToken::Punct) => Token {
                kind: TokenKind::Punctuation,
                value: lex.slice().to_string(),
                range,
            },
            // Skipped by logos; kept only so the variant exists.
            Ok(RawToken::Comment) => continue,
            Err(()) => Token {
                kind: TokenKind::Unknown,
                value: lex.slice().to_string(),
                range,
            },
        };

        prev_end = span.end;
        tokens.push(token);
    }

    let eof_pos = index.position(text.len());
    tokens.push(Token {
        kind: TokenKind::Eof,
        value: String::new(),
        range: SourceRange::new(eof_pos, eof_pos),
    });

    tokens
}
