use tower_lsp::lsp_types::{SemanticToken, SemanticTokenType, SymbolKind};

use crate::semantic_tokens::{encode_delta, RawToken};
use crate::symbols::table::SymbolTable;
use crate::symbols::types::SymbolSource;
use crate::syntax::ast::{Definition, QtnDocument, TypeReference};

/// Emits semantic tokens for every type reference that resolves through the
/// symbol table. References to builtins are skipped unless
/// `include_builtins` is set (configurable so the static highlighter can own
/// builtin coloring).
pub struct SemanticTokenProvider;

impl SemanticTokenProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn provide(
        &self,
        doc: &QtnDocument,
        table: &SymbolTable,
        include_builtins: bool,
    ) -> Vec<SemanticToken> {
        let mut tokens = Vec::new();

        for def in &doc.definitions {
            for type_ref in collect_type_references(def) {
                let symbol = match table.lookup(&type_ref.name) {
                    Some(symbol) => symbol,
                    None => continue,
                };
                if symbol.source == SymbolSource::Builtin && !include_builtins {
                    continue;
                }

                let start = type_ref.name_range.start;
                tokens.push(RawToken {
                    line: start.line,
                    col: start.character,
                    length: reference_length(type_ref),
                    token_type: symbol_token_type(symbol.kind),
                });
            }
        }

        encode_delta(tokens)
    }
}

impl Default for SemanticTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Highlight exactly the written base name. For single-line names this is
/// the `name_range` width, which stays correct for nullable-folded names
/// (`FP?` resolves as `NullableFP` but only `FP` is written).
fn reference_length(type_ref: &TypeReference) -> u32 {
    let range = type_ref.name_range;
    if range.start.line == range.end.line {
        range.end.character.saturating_sub(range.start.character)
    } else {
        type_ref.name.len() as u32
    }
}

fn symbol_token_type(kind: SymbolKind) -> SemanticTokenType {
    match kind {
        SymbolKind::ENUM => SemanticTokenType::ENUM,
        SymbolKind::STRUCT => SemanticTokenType::STRUCT,
        SymbolKind::CLASS => SemanticTokenType::CLASS,
        SymbolKind::EVENT => SemanticTokenType::EVENT,
        SymbolKind::FUNCTION => SemanticTokenType::FUNCTION,
        _ => SemanticTokenType::TYPE,
    }
}

/// All type references in a definition, including nested generic arguments
/// (`list<CharacterState>` contributes both `list` and `CharacterState`).
fn collect_type_references(def: &Definition) -> Vec<&TypeReference> {
    fn add<'a>(refs: &mut Vec<&'a TypeReference>, type_ref: &'a TypeReference) {
        refs.push(type_ref);
        for arg in &type_ref.generic_args {
            add(refs, arg);
        }
    }

    let mut refs = Vec::new();
    match def {
        Definition::Type(d) => {
            for field in &d.fields {
                add(&mut refs, &field.type_ref);
            }
        }
        Definition::Event(d) => {
            for field in &d.fields {
                add(&mut refs, &field.type_ref);
            }
        }
        Definition::Signal(d) => {
            for param in &d.parameters {
                add(&mut refs, &param.type_ref);
            }
        }
        Definition::Input(d) => {
            for field in &d.fields {
                add(&mut refs, &field.type_ref);
            }
        }
        Definition::Global(d) => {
            for field in &d.fields {
                add(&mut refs, &field.type_ref);
            }
        }
        Definition::Import(_) | Definition::Pragma(_) | Definition::Define(_) => {}
    }
    refs
}
