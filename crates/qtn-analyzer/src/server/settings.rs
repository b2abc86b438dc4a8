use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::qtn::builtins::types::Locale;

pub const SETTINGS_SECTION_KEY: &str = "qtn-analyzer";

/// Runtime server settings, merged from LSP initialization options and
/// `workspace/didChangeConfiguration` payloads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerSettings {
    /// Description language for builtin catalogs and hover labels.
    pub locale: Locale,
    pub semantic_tokens: SemanticTokenSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SemanticTokenSettings {
    /// When set, references resolving to builtin types are tokenized too
    /// instead of being left to the static grammar highlighter.
    pub include_builtins: bool,
}

impl ServerSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    pub fn merged_with_payload(&self, payload: &Value) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<ServerSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged
    }

    fn apply_patch(&mut self, patch: ServerSettingsPatch) {
        if let Some(tag) = patch.locale {
            self.locale = Locale::from_editor_tag(&tag);
        }
        if let Some(p) = patch.semantic_tokens {
            if let Some(v) = p.include_builtins {
                self.semantic_tokens.include_builtins = v;
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ServerSettingsPatch {
    locale: Option<String>,
    semantic_tokens: Option<SemanticTokenSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SemanticTokenSettingsPatch {
    include_builtins: Option<bool>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

/// Accept both a bare settings object and one scoped under the section key.
fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = vec![payload.clone()];
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}
