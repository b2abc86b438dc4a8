use indexmap::IndexMap;
use tower_lsp::lsp_types::{Location, Url};

use crate::qtn::builtins::types::Locale;
use crate::symbols::table::SymbolTable;
use crate::symbols::types::{SymbolInfo, SymbolSource};
use crate::syntax::ast::QtnDocument;
use crate::syntax::parser::parse;

/// Freshness of the cached symbol table. Writes move to `Stale`; the next
/// read rebuilds and moves back to `Fresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableState {
    Fresh,
    Stale,
}

/// Owner of every known document and the derived project-wide symbol table.
///
/// `update_document`/`remove_document` only touch the edited entry and mark
/// the table stale; the table is rebuilt from scratch on the next read, so
/// repeated writes between reads cost at most one rebuild. The document map
/// is insertion-ordered, which makes the last-write-wins name resolution
/// across files deterministic.
pub struct ProjectModel {
    documents: IndexMap<Url, QtnDocument>,
    symbol_table: SymbolTable,
    state: TableState,
    locale: Locale,
}

impl ProjectModel {
    pub fn new(locale: Locale) -> Self {
        let mut symbol_table = SymbolTable::new();
        symbol_table.merge_builtins(locale);
        Self {
            documents: IndexMap::new(),
            symbol_table,
            state: TableState::Fresh,
            locale,
        }
    }

    /// Re-parse `text` into a fresh document, replacing any prior document at
    /// this URI. Other documents are untouched.
    pub fn update_document(&mut self, uri: Url, text: &str) {
        let doc = parse(text, &uri);
        self.documents.insert(uri, doc);
        self.state = TableState::Stale;
    }

    pub fn remove_document(&mut self, uri: &Url) {
        self.documents.shift_remove(uri);
        self.state = TableState::Stale;
    }

    pub fn get_document(&self, uri: &Url) -> Option<&QtnDocument> {
        self.documents.get(uri)
    }

    pub fn all_documents(&self) -> &IndexMap<Url, QtnDocument> {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Switch the description locale for builtin symbols. Localized detail
    /// strings live in the table, so this also marks it stale.
    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            self.locale = locale;
            self.state = TableState::Stale;
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The current symbol table, rebuilt first if any write happened since
    /// the last read.
    pub fn symbol_table(&mut self) -> &SymbolTable {
        self.ensure_fresh();
        &self.symbol_table
    }

    /// Location of a user-defined symbol. Builtins and unknown names both
    /// yield `None`, giving callers a uniform not-found signal.
    pub fn find_definition(&mut self, name: &str) -> Option<Location> {
        self.ensure_fresh();
        match self.symbol_table.lookup(name) {
            Some(symbol) if symbol.source == SymbolSource::User => Some(symbol.location.clone()),
            _ => None,
        }
    }

    /// Every symbol currently in the table, types then constants.
    pub fn all_symbols(&mut self) -> Vec<SymbolInfo> {
        self.ensure_fresh();
        self.symbol_table
            .types
            .values()
            .chain(self.symbol_table.constants.values())
            .cloned()
            .collect()
    }

    /// One document plus the fresh table, for handlers that need both under
    /// a single borrow (semantic tokens).
    pub fn document_and_table(&mut self, uri: &Url) -> (Option<&QtnDocument>, &SymbolTable) {
        self.ensure_fresh();
        (self.documents.get(uri), &self.symbol_table)
    }

    /// Every document plus the fresh table (workspace symbol search).
    pub fn documents_and_table(
        &mut self,
    ) -> (impl Iterator<Item = &QtnDocument>, &SymbolTable) {
        self.ensure_fresh();
        (self.documents.values(), &self.symbol_table)
    }

    fn ensure_fresh(&mut self) {
        if self.state == TableState::Stale {
            self.rebuild();
            self.state = TableState::Fresh;
        }
    }

    /// Full rebuild: new table, builtins first (lowest priority), then every
    /// document folded in, in document-map insertion order.
    fn rebuild(&mut self) {
        let mut table = SymbolTable::new();
        table.merge_builtins(self.locale);
        for doc in self.documents.values() {
            table.add_from_document(doc);
        }
        self.symbol_table = table;
    }
}

impl Default for ProjectModel {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}
