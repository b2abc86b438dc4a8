//! Semantic tokens for type references that resolve through the symbol
//! table. Unresolved names are deliberately left untokenized so the static
//! grammar highlighter keeps coloring them.

pub mod provider;

use tower_lsp::lsp_types::{SemanticToken, SemanticTokenType, SemanticTokensLegend};

pub use self::provider::SemanticTokenProvider;

/// Token types legend; order matters (index = token type ID).
pub const LEGEND_TYPES: &[SemanticTokenType] = &[
    SemanticTokenType::TYPE,
    SemanticTokenType::ENUM,
    SemanticTokenType::STRUCT,
    SemanticTokenType::CLASS,
    SemanticTokenType::EVENT,
    SemanticTokenType::FUNCTION,
];

pub fn get_legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: LEGEND_TYPES.into(),
        token_modifiers: vec![],
    }
}

/// A raw token before delta encoding.
#[derive(Clone)]
pub(crate) struct RawToken {
    pub(crate) line: u32,
    pub(crate) col: u32,
    pub(crate) length: u32,
    pub(crate) token_type: SemanticTokenType,
}

pub(crate) fn token_type_index(token_type: &SemanticTokenType) -> u32 {
    LEGEND_TYPES.iter().position(|t| t == token_type).unwrap_or(0) as u32
}

/// Sort tokens and encode as the LSP delta format.
pub(crate) fn encode_delta(mut tokens: Vec<RawToken>) -> Vec<SemanticToken> {
    tokens.sort_by(|a, b| a.line.cmp(&b.line).then(a.col.cmp(&b.col)));

    // Duplicate positions would corrupt the delta stream; keep the first.
    tokens.dedup_by(|a, b| a.line == b.line && a.col == b.col);

    let mut result = Vec::with_capacity(tokens.len());
    let mut prev_line = 0u32;
    let mut prev_col = 0u32;

    for tok in tokens {
        let delta_line = tok.line - prev_line;
        let delta_start = if delta_line == 0 {
            tok.col - prev_col
        } else {
            tok.col
        };

        result.push(SemanticToken {
            delta_line,
            delta_start,
            length: tok.length,
            token_type: token_type_index(&tok.token_type),
            token_modifiers_bitset: 0,
        });

        prev_line = tok.line;
        prev_col = tok.col;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_encoding_is_relative_to_previous_token() {
        let raw = vec![
            RawToken {
                line: 1,
                col: 2,
                length: 3,
                token_type: SemanticTokenType::STRUCT,
            },
            RawToken {
                line: 1,
                col: 8,
                length: 2,
                token_type: SemanticTokenType::ENUM,
            },
            RawToken {
                line: 3,
                col: 4,
                length: 5,
                token_type: SemanticTokenType::CLASS,
            },
        ];

        let encoded = encode_delta(raw);
        assert_eq!(encoded.len(), 3);
        assert_eq!((encoded[0].delta_line, encoded[0].delta_start), (1, 2));
        assert_eq!((encoded[1].delta_line, encoded[1].delta_start), (0, 6));
        assert_eq!((encoded[2].delta_line, encoded[2].delta_start), (2, 4));
    }

    #[test]
    fn unsorted_input_is_sorted_before_encoding() {
        let raw = vec![
            RawToken {
                line: 2,
                col: 0,
                length: 1,
                token_type: SemanticTokenType::TYPE,
            },
            RawToken {
                line: 0,
                col: 0,
                length: 1,
                token_type: SemanticTokenType::TYPE,
            },
        ];
        let encoded = encode_delta(raw);
        assert_eq!(encoded[0].delta_line, 0);
        assert_eq!(encoded[1].delta_line, 2);
    }
}
