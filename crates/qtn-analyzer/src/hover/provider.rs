use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position, SymbolKind};

use crate::project::ProjectModel;
use crate::qtn::builtins::types::Locale;
use crate::qtn::builtins::{
    lookup_attribute, lookup_keyword, lookup_type, AttributeInfo, BuiltinTypeInfo, KeywordInfo,
};
use crate::symbols::types::{builtin_uri, SymbolInfo, SymbolSource};
use crate::text_pos::identifier_at_position;

/// Provides hover documentation for the symbol under the cursor.
///
/// Lookup order: keywords, builtin types, attributes (allowing a `#` prefix),
/// then user-defined symbols from the project's symbol table.
pub struct HoverProvider;

impl HoverProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn provide(
        &self,
        text: &str,
        position: Position,
        project: &mut ProjectModel,
    ) -> Option<Hover> {
        let word = identifier_at_position(text, position, true)?;
        let locale = project.locale();

        if let Some(info) = lookup_keyword(&word) {
            return Some(keyword_hover(info, locale));
        }

        if let Some(info) = lookup_type(&word) {
            return Some(builtin_type_hover(info, locale));
        }

        let attribute_name = word.strip_prefix('#').unwrap_or(&word);
        if let Some(info) = lookup_attribute(attribute_name) {
            return Some(attribute_hover(info, locale));
        }

        let table = project.symbol_table();
        table.lookup(&word).map(|symbol| user_symbol_hover(symbol, locale))
    }
}

impl Default for HoverProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn markdown_hover(value: String) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value,
        }),
        range: None,
    }
}

fn keyword_hover(info: &KeywordInfo, locale: Locale) -> Hover {
    markdown_hover(format!(
        "**{}** ({})\n\n{}",
        info.name,
        info.category.label(),
        info.description(locale)
    ))
}

fn builtin_type_hover(info: &BuiltinTypeInfo, locale: Locale) -> Hover {
    let mut markdown = format!("**{}**", info.name);

    if let Some(csharp) = info.csharp_type {
        markdown.push_str(&format!(" — `{csharp}`"));
    }

    if let Some(size) = info.size {
        match locale {
            Locale::Ko => markdown.push_str(&format!(" ({size}바이트)")),
            Locale::En => {
                let plural = if size == 1 { "" } else { "s" };
                markdown.push_str(&format!(" ({size} byte{plural})"));
            }
        }
    }

    markdown.push_str(&format!("\n\n{}", info.description(locale)));
    markdown_hover(markdown)
}

fn attribute_hover(info: &AttributeInfo, locale: Locale) -> Hover {
    let label = match locale {
        Locale::Ko => "어트리뷰트",
        Locale::En => "attribute",
    };
    let mut markdown = format!("**{}** {label}\n\n{}", info.name, info.description(locale));

    if !info.params.is_empty() {
        let param_label = match locale {
            Locale::Ko => "매개변수",
            Locale::En => "Parameters",
        };
        markdown.push_str(&format!("\n\n{param_label}: {}", info.params.join(", ")));
    }

    markdown_hover(markdown)
}

fn user_symbol_hover(symbol: &SymbolInfo, locale: Locale) -> Hover {
    let mut markdown = format!("**{}**", symbol.detail);

    if !symbol.children.is_empty() {
        let count = symbol.children.len();
        let is_enum = symbol.children[0].kind == SymbolKind::ENUM_MEMBER;
        match locale {
            Locale::Ko => {
                let child_type = if is_enum { "멤버" } else { "필드" };
                markdown.push_str(&format!(" ({count}개 {child_type})"));
            }
            Locale::En => {
                let child_type = if is_enum { "member" } else { "field" };
                let plural = if count == 1 { "" } else { "s" };
                markdown.push_str(&format!(" ({count} {child_type}{plural})"));
            }
        }
    }

    if symbol.source == SymbolSource::User && symbol.location.uri != *builtin_uri() {
        let uri = symbol.location.uri.as_str();
        let filename = uri.rsplit('/').next().unwrap_or(uri);
        let declared_label = match locale {
            Locale::Ko => "선언 위치",
            Locale::En => "Declared in",
        };
        markdown.push_str(&format!("\n\n{declared_label}: `{filename}`"));
    }

    markdown_hover(markdown)
}
