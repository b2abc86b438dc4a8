use serde::Deserialize;

/// Description language for builtin catalogs and human-readable labels.
///
/// Threaded explicitly from server settings into every formatting call; there
/// is no module-level current-locale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    /// Map an editor locale string (`"ko"`, `"ko-KR"`, `"en-US"`, …) to a
    /// supported locale, defaulting to English.
    pub fn from_editor_tag(tag: &str) -> Self {
        if tag.starts_with("ko") {
            Locale::Ko
        } else {
            Locale::En
        }
    }
}

/// An English/Korean description pair. Korean falls back to English when a
/// catalog entry has no translation.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedText {
    pub en: &'static str,
    pub ko: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, ko: &'static str) -> Self {
        Self { en, ko }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ko if !self.ko.is_empty() => self.ko,
            Locale::Ko => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCategory {
    /// C# numeric types and their aliases.
    Primitive,
    /// Engine-provided deterministic simulation types (FP, EntityRef, …).
    Domain,
    /// Generic/parameterized collection types.
    Collection,
    /// Context-restricted types (`button` in input blocks).
    Special,
}

/// A static catalog entry for a built-in QTN type.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTypeInfo {
    pub name: &'static str,
    pub category: BuiltinCategory,
    /// The C# type the code generator maps this name to.
    pub csharp_type: Option<&'static str>,
    /// Size in bytes, where fixed.
    pub size: Option<u32>,
    pub descriptions: LocalizedText,
}

impl BuiltinTypeInfo {
    pub fn description(&self, locale: Locale) -> &'static str {
        self.descriptions.get(locale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    Declaration,
    Modifier,
    Control,
    Directive,
}

impl KeywordCategory {
    pub fn label(self) -> &'static str {
        match self {
            KeywordCategory::Declaration => "declaration",
            KeywordCategory::Modifier => "modifier",
            KeywordCategory::Control => "control",
            KeywordCategory::Directive => "directive",
        }
    }
}

/// A static catalog entry for a QTN keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub name: &'static str,
    pub category: KeywordCategory,
    pub descriptions: LocalizedText,
}

impl KeywordInfo {
    pub fn description(&self, locale: Locale) -> &'static str {
        self.descriptions.get(locale)
    }
}

/// A static catalog entry for a field/type attribute such as `[Header("…")]`.
#[derive(Debug, Clone, Copy)]
pub struct AttributeInfo {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub descriptions: LocalizedText,
}

impl AttributeInfo {
    pub fn description(&self, locale: Locale) -> &'static str {
        self.descriptions.get(locale)
    }
}
