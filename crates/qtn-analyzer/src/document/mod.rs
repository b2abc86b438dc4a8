pub mod document_store;

pub use self::document_store::DocumentStore;

use tower_lsp::lsp_types::Url;

/// An open text document: the raw source the feature handlers scan for
/// cursor context, alongside the version reported by the client.
#[derive(Debug, Clone)]
pub struct Document {
    pub uri: Url,
    pub text: String,
    pub version: i32,
}

impl Document {
    pub fn new(uri: Url, text: String, version: i32) -> Self {
        Self { uri, text, version }
    }

    pub fn set_content(&mut self, text: String, version: i32) {
        self.text = text;
        self.version = version;
    }
}
