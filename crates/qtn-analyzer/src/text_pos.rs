use tower_lsp::lsp_types::Position;

/// Convert an LSP position (UTF-16 column) to a byte offset into `source`.
pub fn byte_offset_from_position(source: &str, position: Position) -> Option<usize> {
    let line_idx = position.line as usize;
    let mut lines = source.split('\n');
    let mut byte_offset = 0usize;

    for _ in 0..line_idx {
        let line = lines.next()?;
        byte_offset += line.len() + 1;
    }

    let line = lines.next()?;
    let mut utf16_offset = 0u32;
    let mut char_offset = 0usize;
    for ch in line.chars() {
        if utf16_offset >= position.character {
            break;
        }
        utf16_offset += ch.len_utf16() as u32;
        char_offset += ch.len_utf8();
    }

    Some(byte_offset + char_offset)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// The identifier under the cursor: `[A-Za-z0-9_]+`, optionally including a
/// directly preceding `#` so `#pragma`/`#define` and `#Attr` lookups work.
pub fn identifier_at_position(
    source: &str,
    position: Position,
    allow_hash_prefix: bool,
) -> Option<String> {
    let offset = byte_offset_from_position(source, position)?;
    let bytes = source.as_bytes();

    let mut start = offset.min(bytes.len());
    while start > 0 && is_word_byte(bytes[start - 1]) {
        start -= 1;
    }

    if allow_hash_prefix && start > 0 && bytes[start - 1] == b'#' {
        start -= 1;
    }

    let mut end = offset.min(bytes.len());
    while end < bytes.len() && is_word_byte(bytes[end]) {
        end += 1;
    }

    if start == end {
        return None;
    }

    Some(source[start..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_in_middle_of_word() {
        let src = "struct Player {";
        let word = identifier_at_position(src, Position::new(0, 9), false);
        assert_eq!(word.as_deref(), Some("Player"));
    }

    #[test]
    fn hash_prefix_is_optional() {
        let src = "#pragma max_players 16";
        assert_eq!(
            identifier_at_position(src, Position::new(0, 3), true).as_deref(),
            Some("#pragma")
        );
        assert_eq!(
            identifier_at_position(src, Position::new(0, 3), false).as_deref(),
            Some("pragma")
        );
    }

    #[test]
    fn none_between_words() {
        let src = "int hp;";
        assert_eq!(identifier_at_position(src, Position::new(0, 7), false), None);
    }

    #[test]
    fn offset_past_end_of_text() {
        assert_eq!(identifier_at_position("x", Position::new(5, 0), false), None);
    }
}
