use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, Position, SymbolKind};

use crate::completion::context::{detect_context, CursorContext};
use crate::project::ProjectModel;
use crate::qtn::builtins::database::{
    lookup_keyword, COLLECTION_TYPES, DOMAIN_TYPES, PRIMITIVE_TYPES, SPECIAL_TYPES,
};
use crate::qtn::builtins::keywords::{
    COMPLETION_TOP_LEVEL_KEYWORDS, ENUM_BASE_TYPES, FIELD_MODIFIERS, IMPORT_SUB_KEYWORDS,
};
use crate::qtn::builtins::types::Locale;
use crate::qtn::builtins::{self, BuiltinTypeInfo};
use crate::symbols::types::SymbolSource;

/// Provides context-sensitive completion items.
pub struct CompletionProvider;

impl CompletionProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn provide(
        &self,
        text: &str,
        position: Position,
        project: &mut ProjectModel,
    ) -> Vec<CompletionItem> {
        let locale = project.locale();
        match detect_context(text, position) {
            CursorContext::TopLevel => top_level_items(locale),
            CursorContext::FieldType => field_type_items(project, locale),
            CursorContext::Attribute => attribute_items(locale),
            CursorContext::InputBlock => input_block_items(project, locale),
            CursorContext::Import => import_items(locale),
            CursorContext::EnumBase => enum_base_items(locale),
            CursorContext::Generic => field_type_items(project, locale),
        }
    }
}

impl Default for CompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn item(label: &str, kind: CompletionItemKind, detail: String) -> CompletionItem {
    CompletionItem {
        label: label.to_string(),
        kind: Some(kind),
        detail: Some(detail),
        ..Default::default()
    }
}

fn builtin_type_item(info: &BuiltinTypeInfo, kind: CompletionItemKind, locale: Locale) -> CompletionItem {
    item(info.name, kind, info.description(locale).to_string())
}

fn top_level_items(locale: Locale) -> Vec<CompletionItem> {
    let fallback = match locale {
        Locale::Ko => "QTN 키워드",
        Locale::En => "QTN keyword",
    };
    COMPLETION_TOP_LEVEL_KEYWORDS
        .iter()
        .map(|&keyword| {
            let detail = lookup_keyword(keyword)
                .map(|info| info.description(locale))
                .unwrap_or(fallback);
            item(keyword, CompletionItemKind::KEYWORD, detail.to_string())
        })
        .collect()
}

/// Field modifiers, the full builtin type catalog, and user-defined types.
fn field_type_items(project: &mut ProjectModel, locale: Locale) -> Vec<CompletionItem> {
    let mut items = Vec::new();

    for &keyword in FIELD_MODIFIERS {
        let detail = lookup_keyword(keyword)
            .map(|info| info.description(locale))
            .unwrap_or(keyword);
        items.push(item(keyword, CompletionItemKind::KEYWORD, detail.to_string()));
    }

    for info in PRIMITIVE_TYPES {
        items.push(builtin_type_item(info, CompletionItemKind::STRUCT, locale));
    }
    for info in DOMAIN_TYPES {
        items.push(builtin_type_item(info, CompletionItemKind::CLASS, locale));
    }
    for info in COLLECTION_TYPES {
        items.push(builtin_type_item(info, CompletionItemKind::CLASS, locale));
    }

    let table = project.symbol_table();
    for symbol in table.types.values() {
        if symbol.source == SymbolSource::User {
            items.push(item(
                &symbol.name,
                symbol_completion_kind(symbol.kind),
                symbol.detail.clone(),
            ));
        }
    }

    items
}

fn attribute_items(locale: Locale) -> Vec<CompletionItem> {
    builtins::database::ATTRIBUTES
        .iter()
        .map(|info| item(info.name, CompletionItemKind::PROPERTY, info.description(locale).to_string()))
        .collect()
}

fn input_block_items(project: &mut ProjectModel, locale: Locale) -> Vec<CompletionItem> {
    let mut items = field_type_items(project, locale);
    for info in SPECIAL_TYPES {
        if info.name == "button" {
            items.push(builtin_type_item(info, CompletionItemKind::KEYWORD, locale));
        }
    }
    items
}

fn import_items(locale: Locale) -> Vec<CompletionItem> {
    let detail = match locale {
        Locale::Ko => "import 하위 키워드",
        Locale::En => "Import sub-keyword",
    };
    IMPORT_SUB_KEYWORDS
        .iter()
        .map(|&keyword| item(keyword, CompletionItemKind::KEYWORD, detail.to_string()))
        .collect()
}

fn enum_base_items(locale: Locale) -> Vec<CompletionItem> {
    let detail = match locale {
        Locale::Ko => "enum 기본 타입용 정수 타입",
        Locale::En => "Integer type for enum base",
    };
    ENUM_BASE_TYPES
        .iter()
        .map(|&name| item(name, CompletionItemKind::STRUCT, detail.to_string()))
        .collect()
}

fn symbol_completion_kind(kind: SymbolKind) -> CompletionItemKind {
    match kind {
        SymbolKind::CLASS => CompletionItemKind::CLASS,
        SymbolKind::STRUCT => CompletionItemKind::STRUCT,
        SymbolKind::ENUM => CompletionItemKind::ENUM,
        SymbolKind::EVENT => CompletionItemKind::EVENT,
        SymbolKind::FUNCTION => CompletionItemKind::FUNCTION,
        SymbolKind::INTERFACE => CompletionItemKind::INTERFACE,
        _ => CompletionItemKind::CLASS,
    }
}
