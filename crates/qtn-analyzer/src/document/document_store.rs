use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

use super::Document;

/// Thread-safe store of all open documents' raw text.
///
/// Uses `DashMap` internally so that all operations are safe to call
/// concurrently from any async task without external synchronisation.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Open (register) a new document.
    pub fn open(&self, uri: Url, text: String, version: i32) {
        self.documents
            .insert(uri.clone(), Document::new(uri, text, version));
    }

    /// Replace the full content of an already-open document. Documents sync
    /// with full text, so this is the only change path.
    pub fn update(&self, uri: Url, text: String, version: i32) {
        if let Some(mut doc) = self.documents.get_mut(&uri) {
            doc.set_content(text, version);
        } else {
            // Treat as open if not already tracked.
            self.documents
                .insert(uri.clone(), Document::new(uri, text, version));
        }
    }

    /// Close (unregister) a document.
    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Return a clone of the full document text, if the URI is tracked.
    pub fn get_content(&self, uri: &Url) -> Option<String> {
        self.documents.get(uri).map(|r| r.value().text.clone())
    }
}
