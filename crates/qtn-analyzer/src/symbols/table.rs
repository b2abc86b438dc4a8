use std::collections::HashMap;

use tower_lsp::lsp_types::{Location, SymbolKind};

use crate::qtn::builtins::types::Locale;
use crate::qtn::builtins::{self, BuiltinTypeInfo};
use crate::symbols::format::{
    enum_member_detail, event_detail, field_detail, signal_detail, type_definition_detail,
};
use crate::symbols::types::{
    builtin_symbol_kind, builtin_uri, location, type_kind_symbol_kind, SymbolInfo, SymbolSource,
};
use crate::syntax::ast::{
    DefineDefinition, Definition, EnumMemberDefinition, EventDefinition, FieldDefinition,
    GlobalDefinition, ImportDefinition, InputDefinition, QtnDocument, SignalDefinition,
    TypeDefinition,
};

/// Project-wide symbol index: one map for type-like symbols (components,
/// structs, enums, events, signals, the `input`/`global` singletons) and one
/// for `#define` constants.
///
/// A name declared twice silently replaces the earlier symbol; last write
/// wins across the whole project. Builtins never overwrite user symbols.
#[derive(Debug, Default)]
pub struct SymbolTable {
    pub types: HashMap<String, SymbolInfo>,
    pub constants: HashMap<String, SymbolInfo>,
    pub imports: Vec<ImportDefinition>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all entries, then index the document.
    pub fn build_from_document(&mut self, doc: &QtnDocument) {
        self.types.clear();
        self.constants.clear();
        self.imports.clear();
        self.add_from_document(doc);
    }

    /// Index the document without clearing existing entries. Used for
    /// incremental multi-document aggregation by the project model.
    pub fn add_from_document(&mut self, doc: &QtnDocument) {
        for def in &doc.definitions {
            self.process_definition(def);
        }
    }

    fn process_definition(&mut self, def: &Definition) {
        match def {
            Definition::Type(d) => self.process_type(d),
            Definition::Event(d) => self.process_event(d),
            Definition::Signal(d) => self.process_signal(d),
            Definition::Input(d) => self.process_input(d),
            Definition::Global(d) => self.process_global(d),
            Definition::Import(d) => self.imports.push(d.clone()),
            Definition::Define(d) => self.process_define(d),
            // Pragmas configure the project; they do not create symbols.
            Definition::Pragma(_) => {}
        }
    }

    fn process_type(&mut self, def: &TypeDefinition) {
        let mut children: Vec<SymbolInfo> = def
            .fields
            .iter()
            .map(|field| field_symbol(field, def))
            .collect();
        children.extend(def.enum_members.iter().map(|member| enum_member_symbol(member, def)));

        let symbol = SymbolInfo {
            name: def.name.clone(),
            kind: type_kind_symbol_kind(def.kind),
            location: location(&def.file_uri, def.range),
            detail: type_definition_detail(def),
            children,
            source: SymbolSource::User,
        };
        self.types.insert(def.name.clone(), symbol);
    }

    fn process_event(&mut self, def: &EventDefinition) {
        let children = def
            .fields
            .iter()
            .map(|field| SymbolInfo {
                name: field.name.clone(),
                kind: SymbolKind::FIELD,
                location: location(&def.file_uri, field.range),
                detail: field_detail(field),
                children: Vec::new(),
                source: SymbolSource::User,
            })
            .collect();

        let symbol = SymbolInfo {
            name: def.name.clone(),
            kind: SymbolKind::EVENT,
            location: location(&def.file_uri, def.range),
            detail: event_detail(def),
            children,
            source: SymbolSource::User,
        };
        self.types.insert(def.name.clone(), symbol);
    }

    fn process_signal(&mut self, def: &SignalDefinition) {
        let symbol = SymbolInfo {
            name: def.name.clone(),
            kind: SymbolKind::FUNCTION,
            location: location(&def.file_uri, def.range),
            detail: signal_detail(def),
            children: Vec::new(),
            source: SymbolSource::User,
        };
        self.types.insert(def.name.clone(), symbol);
    }

    fn process_input(&mut self, def: &InputDefinition) {
        let children = def
            .fields
            .iter()
            .map(|field| SymbolInfo {
                name: field.name.clone(),
                kind: SymbolKind::FIELD,
                location: location(&def.file_uri, field.range),
                detail: field_detail(field),
                children: Vec::new(),
                source: SymbolSource::User,
            })
            .collect();

        // One input block per project, keyed by the synthetic name.
        let symbol = SymbolInfo {
            name: "input".to_string(),
            kind: SymbolKind::INTERFACE,
            location: location(&def.file_uri, def.range),
            detail: "input".to_string(),
            children,
            source: SymbolSource::User,
        };
        self.types.insert("input".to_string(), symbol);
    }

    fn process_global(&mut self, def: &GlobalDefinition) {
        let children = def
            .fields
            .iter()
            .map(|field| SymbolInfo {
                name: field.name.clone(),
                kind: SymbolKind::FIELD,
                location: location(&def.file_uri, field.range),
                detail: field_detail(field),
                children: Vec::new(),
                source: SymbolSource::User,
            })
            .collect();

        let symbol = SymbolInfo {
            name: "global".to_string(),
            kind: SymbolKind::NAMESPACE,
            location: location(&def.file_uri, def.range),
            detail: "global".to_string(),
            children,
            source: SymbolSource::User,
        };
        self.types.insert("global".to_string(), symbol);
    }

    fn process_define(&mut self, def: &DefineDefinition) {
        let symbol = SymbolInfo {
            name: def.name.clone(),
            kind: SymbolKind::CONSTANT,
            location: location(&def.file_uri, def.range),
            detail: format!("#define {} = {}", def.name, def.value),
            children: Vec::new(),
            source: SymbolSource::User,
        };
        self.constants.insert(def.name.clone(), symbol);
    }

    /// Seed the table with the builtin type catalog. Builtins are lowest
    /// priority: a user definition of the same name is never overwritten.
    pub fn merge_builtins(&mut self, locale: Locale) {
        for info in builtins::all_types() {
            if !self.types.contains_key(info.name) {
                self.types
                    .insert(info.name.to_string(), builtin_symbol(info, locale));
            }
        }
    }

    /// Exact lookup: type map first, then constants.
    pub fn lookup(&self, name: &str) -> Option<&SymbolInfo> {
        self.types.get(name).or_else(|| self.constants.get(name))
    }

    /// Case-insensitive ranked search over both maps: exact match scores 3,
    /// prefix 2, substring 1; results sort by descending score, ties broken
    /// by ascending name.
    pub fn fuzzy_search(&self, query: &str) -> Vec<&SymbolInfo> {
        let query_lower = query.to_lowercase();
        let mut results: Vec<(u8, &SymbolInfo)> = Vec::new();

        for symbol in self.types.values().chain(self.constants.values()) {
            let name_lower = symbol.name.to_lowercase();
            let score = if name_lower == query_lower {
                3
            } else if name_lower.starts_with(&query_lower) {
                2
            } else if name_lower.contains(&query_lower) {
                1
            } else {
                0
            };

            if score > 0 {
                results.push((score, symbol));
            }
        }

        results.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.name.cmp(&b.1.name)));
        results.into_iter().map(|(_, symbol)| symbol).collect()
    }
}

fn field_symbol(field: &FieldDefinition, parent: &TypeDefinition) -> SymbolInfo {
    SymbolInfo {
        name: field.name.clone(),
        kind: SymbolKind::FIELD,
        location: location(&parent.file_uri, field.range),
        detail: field_detail(field),
        children: Vec::new(),
        source: SymbolSource::User,
    }
}

fn enum_member_symbol(member: &EnumMemberDefinition, parent: &TypeDefinition) -> SymbolInfo {
    SymbolInfo {
        name: member.name.clone(),
        kind: SymbolKind::ENUM_MEMBER,
        location: location(&parent.file_uri, member.range),
        detail: enum_member_detail(member),
        children: Vec::new(),
        source: SymbolSource::User,
    }
}

fn builtin_symbol(info: &BuiltinTypeInfo, locale: Locale) -> SymbolInfo {
    SymbolInfo {
        name: info.name.to_string(),
        kind: builtin_symbol_kind(info.category),
        location: Location {
            uri: builtin_uri().clone(),
            range: Default::default(),
        },
        detail: info.description(locale).to_string(),
        children: Vec::new(),
        source: SymbolSource::Builtin,
    }
}
