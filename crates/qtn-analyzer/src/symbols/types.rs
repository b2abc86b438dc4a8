use std::sync::OnceLock;

use tower_lsp::lsp_types::{Location, SymbolKind, Url};

use crate::qtn::builtins::BuiltinCategory;
use crate::syntax::ast::{Definition, SourceRange, TypeKind};

/// Where a symbol came from. Consumers distinguish "no symbol" from
/// "builtin" from "user-defined" through this tag instead of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolSource {
    Builtin,
    User,
    Import,
}

/// A named, kind-tagged entity with a source location and children
/// (fields, enum members).
#[derive(Debug, Clone)]
pub struct SymbolInfo {
    pub name: String,
    pub kind: SymbolKind,
    pub location: Location,
    pub detail: String,
    pub children: Vec<SymbolInfo>,
    pub source: SymbolSource,
}

/// Placeholder URI for builtin symbol locations. `find_definition` never
/// returns these; the URI only keeps the `Location` shape uniform.
pub fn builtin_uri() -> &'static Url {
    static URI: OnceLock<Url> = OnceLock::new();
    URI.get_or_init(|| Url::parse("builtin://qtn").expect("static builtin URI"))
}

pub fn location(file_uri: &Url, range: SourceRange) -> Location {
    Location {
        uri: file_uri.clone(),
        range: range.to_lsp(),
    }
}

pub fn type_kind_symbol_kind(kind: TypeKind) -> SymbolKind {
    match kind {
        TypeKind::Component | TypeKind::Asset => SymbolKind::CLASS,
        TypeKind::Struct | TypeKind::Union => SymbolKind::STRUCT,
        TypeKind::Enum | TypeKind::Flags => SymbolKind::ENUM,
    }
}

pub fn definition_symbol_kind(def: &Definition) -> SymbolKind {
    match def {
        Definition::Type(d) => type_kind_symbol_kind(d.kind),
        Definition::Event(_) => SymbolKind::EVENT,
        Definition::Signal(_) => SymbolKind::FUNCTION,
        Definition::Input(_) => SymbolKind::INTERFACE,
        Definition::Global(_) => SymbolKind::NAMESPACE,
        Definition::Define(_) | Definition::Pragma(_) => SymbolKind::CONSTANT,
        Definition::Import(_) => SymbolKind::MODULE,
    }
}

pub fn builtin_symbol_kind(category: BuiltinCategory) -> SymbolKind {
    match category {
        BuiltinCategory::Primitive => SymbolKind::STRUCT,
        BuiltinCategory::Domain | BuiltinCategory::Collection | BuiltinCategory::Special => {
            SymbolKind::CLASS
        }
    }
}
