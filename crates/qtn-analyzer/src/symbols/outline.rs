//! Document outline and workspace symbol search, built directly from parsed
//! definitions.

use tower_lsp::lsp_types::{DocumentSymbol, Location, SymbolInformation, SymbolKind};

use crate::symbols::format::format_type_reference;
use crate::symbols::table::SymbolTable;
use crate::symbols::types::{definition_symbol_kind, type_kind_symbol_kind, SymbolSource};
use crate::syntax::ast::{
    Definition, EnumMemberDefinition, FieldDefinition, ImportKind, QtnDocument,
};

/// Hierarchical outline of one document: every top-level definition, with
/// fields and enum members as children.
pub fn document_symbols(doc: &QtnDocument) -> Vec<DocumentSymbol> {
    doc.definitions.iter().map(definition_symbol).collect()
}

/// Flat project-wide symbol list. An empty query lists every definition in
/// every document; otherwise the symbol table's fuzzy search ranks matches,
/// with builtins excluded.
pub fn workspace_symbols<'a>(
    documents: impl Iterator<Item = &'a QtnDocument>,
    table: &SymbolTable,
    query: &str,
) -> Vec<SymbolInformation> {
    if query.trim().is_empty() {
        let mut symbols = Vec::new();
        for doc in documents {
            for def in &doc.definitions {
                #[allow(deprecated)]
                symbols.push(SymbolInformation {
                    name: flat_name(def),
                    kind: definition_symbol_kind(def),
                    tags: None,
                    deprecated: None,
                    location: Location {
                        uri: doc.uri.clone(),
                        range: def.range().to_lsp(),
                    },
                    container_name: None,
                });
            }
        }
        return symbols;
    }

    table
        .fuzzy_search(query)
        .into_iter()
        .filter(|symbol| symbol.source != SymbolSource::Builtin)
        .map(|symbol| {
            #[allow(deprecated)]
            SymbolInformation {
                name: symbol.name.clone(),
                kind: symbol.kind,
                tags: None,
                deprecated: None,
                location: symbol.location.clone(),
                container_name: None,
            }
        })
        .collect()
}

fn flat_name(def: &Definition) -> String {
    match def.name() {
        Some(name) => name.to_string(),
        None => match def {
            Definition::Input(_) => "input".to_string(),
            Definition::Global(_) => "global".to_string(),
            Definition::Pragma(d) => format!("#pragma {}", d.key),
            _ => String::new(),
        },
    }
}

fn field_symbol(field: &FieldDefinition) -> DocumentSymbol {
    #[allow(deprecated)]
    DocumentSymbol {
        name: field.name.clone(),
        detail: Some(format_type_reference(&field.type_ref)),
        kind: SymbolKind::FIELD,
        tags: None,
        deprecated: None,
        range: field.range.to_lsp(),
        selection_range: field.range.to_lsp(),
        children: None,
    }
}

fn enum_member_symbol(member: &EnumMemberDefinition) -> DocumentSymbol {
    #[allow(deprecated)]
    DocumentSymbol {
        name: member.name.clone(),
        detail: member.value.map(|value| format!("= {value}")),
        kind: SymbolKind::ENUM_MEMBER,
        tags: None,
        deprecated: None,
        range: member.range.to_lsp(),
        selection_range: member.range.to_lsp(),
        children: None,
    }
}

fn definition_symbol(def: &Definition) -> DocumentSymbol {
    let range = def.range().to_lsp();

    let (name, kind, detail, children) = match def {
        Definition::Type(d) => {
            let mut children: Vec<DocumentSymbol> = d.fields.iter().map(field_symbol).collect();
            children.extend(d.enum_members.iter().map(enum_member_symbol));

            let mut detail = d.kind.keyword().to_string();
            if !d.modifiers.is_empty() {
                detail = format!("{} {}", d.modifiers.join(" "), detail);
            }
            if let Some(base) = &d.base_type {
                detail.push_str(&format!(" : {base}"));
            }

            (d.name.clone(), type_kind_symbol_kind(d.kind), detail, Some(children))
        }
        Definition::Event(d) => {
            let children: Vec<DocumentSymbol> = d.fields.iter().map(field_symbol).collect();

            let mut detail = "event".to_string();
            if !d.modifiers.is_empty() {
                detail = format!("{} {}", d.modifiers.join(" "), detail);
            }
            if let Some(parent) = &d.parent_name {
                detail.push_str(&format!(" : {parent}"));
            }

            (d.name.clone(), SymbolKind::EVENT, detail, Some(children))
        }
        Definition::Signal(d) => {
            let params: Vec<String> = d
                .parameters
                .iter()
                .map(|p| format!("{} {}", format_type_reference(&p.type_ref), p.name))
                .collect();
            (
                d.name.clone(),
                SymbolKind::FUNCTION,
                format!("({})", params.join(", ")),
                None,
            )
        }
        Definition::Input(d) => (
            "input".to_string(),
            SymbolKind::INTERFACE,
            "input".to_string(),
            Some(d.fields.iter().map(field_symbol).collect()),
        ),
        Definition::Global(d) => (
            "global".to_string(),
            SymbolKind::NAMESPACE,
            "global".to_string(),
            Some(d.fields.iter().map(field_symbol).collect()),
        ),
        Definition::Import(d) => {
            let detail = match d.import_kind {
                ImportKind::Using => "using".to_string(),
                ImportKind::Struct => "import struct".to_string(),
                ImportKind::Enum => "import enum".to_string(),
                ImportKind::Singleton => "import singleton".to_string(),
                ImportKind::Type => "import type".to_string(),
            };
            (d.name.clone(), SymbolKind::MODULE, detail, None)
        }
        Definition::Pragma(d) => (
            format!("#pragma {}", d.key),
            SymbolKind::CONSTANT,
            d.value.clone(),
            None,
        ),
        Definition::Define(d) => (
            d.name.clone(),
            SymbolKind::CONSTANT,
            format!("#define = {}", d.value),
            None,
        ),
    };

    #[allow(deprecated)]
    DocumentSymbol {
        name,
        detail: Some(detail),
        kind,
        tags: None,
        deprecated: None,
        range,
        selection_range: range,
        children,
    }
}
