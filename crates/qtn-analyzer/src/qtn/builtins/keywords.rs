use std::collections::HashSet;
use std::sync::OnceLock;

/// Reserved words recognized by the lexer. Anything else that matches the
/// identifier pattern is an `Identifier` token.
pub static RESERVED_WORDS: &[&str] = &[
    "struct",
    "union",
    "enum",
    "flags",
    "component",
    "fields",
    "use",
    "global",
    "buffers",
    "input",
    "signal",
    "asset_ref",
    "AssetRef",
    "array",
    "entity_ref",
    "EntityRef",
    "entity_prototype_ref",
    "component_prototype_ref",
    "bitset",
    "void",
    "import",
    "button",
    "Button",
    "nothashed",
    "event",
    "abstract",
    "synced",
    "asset",
    "command",
    "player_ref",
    "local",
    "remote",
    "filter",
    "has",
    "not",
    "any",
    "list",
    "dictionary",
    "typeof",
    "using",
    "singleton",
    "qstringutf8",
    "QStringUtf8",
    "qstring",
    "QString",
    "client",
    "server",
    "enum_count",
    "hash_set",
    "ref",
    "set",
    "PlayerRef",
];

/// Keywords that can begin a top-level construct. The parser's panic-mode
/// recovery stops in front of these so the main loop can re-dispatch.
pub static TOP_LEVEL_KEYWORDS: &[&str] = &[
    "component",
    "struct",
    "enum",
    "flags",
    "union",
    "event",
    "signal",
    "input",
    "global",
    "asset",
    "import",
    "using",
    "singleton",
    "abstract",
    "#pragma",
    "#define",
    "synced",
    "client",
    "server",
];

/// Modifier keywords that may precede a type in field declarations.
pub static FIELD_MODIFIERS: &[&str] = &["nothashed", "synced", "local", "remote", "client", "server"];

/// Integer types valid as enum/flags underlying types.
pub static ENUM_BASE_TYPES: &[&str] = &[
    "Byte", "SByte", "Int16", "UInt16", "Int32", "UInt32", "Int64", "UInt64",
];

/// Sub-keywords that may follow `import`.
pub static IMPORT_SUB_KEYWORDS: &[&str] = &["struct", "enum", "singleton"];

/// Top-level keywords offered by completion at file scope. Extends
/// [`TOP_LEVEL_KEYWORDS`] with the event modifiers that precede declarations.
pub static COMPLETION_TOP_LEVEL_KEYWORDS: &[&str] = &[
    "component",
    "struct",
    "enum",
    "flags",
    "union",
    "event",
    "signal",
    "input",
    "global",
    "asset",
    "import",
    "using",
    "singleton",
    "abstract",
    "synced",
    "local",
    "remote",
    "client",
    "server",
    "#pragma",
    "#define",
];

pub fn is_reserved_word(word: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| RESERVED_WORDS.iter().copied().collect())
        .contains(word)
}

pub fn is_top_level_keyword(word: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| TOP_LEVEL_KEYWORDS.iter().copied().collect())
        .contains(word)
}

pub fn is_field_modifier(word: &str) -> bool {
    FIELD_MODIFIERS.contains(&word)
}

/// Keywords that can only start a new top-level definition, never a field.
/// Excludes the shared modifiers (`synced`, `client`, `server`), which are
/// legal at the start of a field declaration.
pub fn starts_top_level_definition(word: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        TOP_LEVEL_KEYWORDS
            .iter()
            .copied()
            .filter(|kw| !FIELD_MODIFIERS.contains(kw))
            .collect()
    })
    .contains(word)
}
