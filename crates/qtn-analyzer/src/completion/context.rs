use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::Position;

use crate::text_pos::byte_offset_from_position;

/// Syntactic context at the cursor, decided by scanning the raw text. Each
/// context selects a different completion catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorContext {
    /// File scope: declaration keywords.
    TopLevel,
    /// Inside a definition body: field modifiers and types.
    FieldType,
    /// Inside an unmatched `[`: attribute names.
    Attribute,
    /// Inside the `input { … }` block: field types plus `button`.
    InputBlock,
    /// After `import`: its sub-keywords.
    Import,
    /// After `enum Name :` / `flags Name :`: integer base types.
    EnumBase,
    /// Inside `< … >`: generic type arguments.
    Generic,
}

static IMPORT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^import\s+\w*$").expect("static pattern"));
static ENUM_BASE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(enum|flags)\s+\w+\s*:\s*\w*$").expect("static pattern"));

pub fn detect_context(text: &str, position: Position) -> CursorContext {
    let offset = match byte_offset_from_position(text, position) {
        Some(offset) => offset,
        None => return CursorContext::TopLevel,
    };
    let text_up_to_cursor = &text[..offset];

    // Current line up to the cursor.
    let line_start = text_up_to_cursor
        .rfind(['\n', '\r'])
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let line_up_to_cursor = &text_up_to_cursor[line_start..];

    if has_unmatched_open_bracket(text_up_to_cursor) {
        return CursorContext::Attribute;
    }
    if is_after_generic_open(line_up_to_cursor) {
        return CursorContext::Generic;
    }
    if IMPORT_LINE.is_match(line_up_to_cursor.trim()) {
        return CursorContext::Import;
    }
    if ENUM_BASE_LINE.is_match(line_up_to_cursor) {
        return CursorContext::EnumBase;
    }
    if is_inside_input_block(text_up_to_cursor) {
        return CursorContext::InputBlock;
    }
    if is_field_type_position(text_up_to_cursor) {
        return CursorContext::FieldType;
    }

    CursorContext::TopLevel
}

/// Unmatched `[` before the cursor, ignoring brackets inside strings and
/// comments.
fn has_unmatched_open_bracket(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut open_count = 0i32;
    let mut in_string = false;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    let mut i = 0;
    while i < bytes.len() {
        let ch = bytes[i];
        let next = bytes.get(i + 1).copied();

        if !in_string && !in_block_comment && ch == b'/' && next == Some(b'/') {
            in_line_comment = true;
            i += 2;
            continue;
        }
        if !in_string && !in_line_comment && ch == b'/' && next == Some(b'*') {
            in_block_comment = true;
            i += 2;
            continue;
        }
        if in_block_comment && ch == b'*' && next == Some(b'/') {
            in_block_comment = false;
            i += 2;
            continue;
        }
        if in_line_comment && (ch == b'\n' || ch == b'\r') {
            in_line_comment = false;
            i += 1;
            continue;
        }
        if in_line_comment || in_block_comment {
            i += 1;
            continue;
        }

        if ch == b'"' && (i == 0 || bytes[i - 1] != b'\\') {
            in_string = !in_string;
            i += 1;
            continue;
        }
        if in_string {
            i += 1;
            continue;
        }

        match ch {
            b'[' => open_count += 1,
            b']' => open_count -= 1,
            _ => {}
        }
        i += 1;
    }

    open_count > 0
}

/// Cursor sits inside `< … >` on the current line.
fn is_after_generic_open(line_up_to_cursor: &str) -> bool {
    if line_up_to_cursor.trim_end().ends_with('<') {
        return true;
    }
    let last_open = line_up_to_cursor.rfind('<');
    let last_close = line_up_to_cursor.rfind('>');
    match (last_open, last_close) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Walk backwards over brace pairs; the first unmatched `{` decides whether
/// the cursor is inside the `input` block.
fn is_inside_input_block(text_up_to_cursor: &str) -> bool {
    let bytes = text_up_to_cursor.as_bytes();
    let mut brace_depth = 0i32;

    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b'}' => brace_depth += 1,
            b'{' => {
                brace_depth -= 1;
                if brace_depth < 0 {
                    // The enclosing block opener; look back for `input`.
                    let mut j = i;
                    while j > 0 && bytes[j - 1].is_ascii_whitespace() {
                        j -= 1;
                    }
                    return text_up_to_cursor[..j].ends_with("input");
                }
            }
            _ => {}
        }
    }

    false
}

/// Inside any block body (unmatched `{`), ignoring braces inside strings.
fn is_field_type_position(text_up_to_cursor: &str) -> bool {
    let bytes = text_up_to_cursor.as_bytes();
    let mut brace_depth = 0i32;
    let mut in_string = false;

    for (i, &ch) in bytes.iter().enumerate() {
        if ch == b'"' && (i == 0 || bytes[i - 1] != b'\\') {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }
        match ch {
            b'{' => brace_depth += 1,
            b'}' => brace_depth -= 1,
            _ => {}
        }
    }

    brace_depth > 0
}
