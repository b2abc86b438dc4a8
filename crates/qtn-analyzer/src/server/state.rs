use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tower_lsp::{lsp_types::WorkspaceFolder, Client};

use crate::{
    completion::CompletionProvider, definition::DefinitionProvider, document::DocumentStore,
    hover::HoverProvider, project::ProjectModel, semantic_tokens::SemanticTokenProvider,
    server::settings::ServerSettings,
};

/// The qtn-analyzer backend that implements the Language Server Protocol.
pub struct QtnLanguageServer {
    /// The LSP client handle, used to send notifications back.
    pub(crate) client: Client,

    /// Thread-safe store of all open documents' raw text.
    pub(crate) document_store: Arc<DocumentStore>,

    /// Parsed documents and the derived symbol table. One mutex guards every
    /// mutate-then-maybe-rebuild-then-read sequence; the dirty-flag check is
    /// not safe to interleave.
    pub(crate) project: Arc<Mutex<ProjectModel>>,

    pub(crate) completion_provider: CompletionProvider,
    pub(crate) hover_provider: HoverProvider,
    pub(crate) definition_provider: DefinitionProvider,
    pub(crate) semantic_token_provider: SemanticTokenProvider,

    /// Workspace root folders, populated during `initialize`.
    pub(crate) workspace_roots: RwLock<Vec<WorkspaceFolder>>,

    /// Runtime server settings updated from LSP configuration.
    pub(crate) settings: Arc<RwLock<ServerSettings>>,
}

impl QtnLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            document_store: Arc::new(DocumentStore::new()),
            project: Arc::new(Mutex::new(ProjectModel::default())),
            completion_provider: CompletionProvider::new(),
            hover_provider: HoverProvider::new(),
            definition_provider: DefinitionProvider::new(),
            semantic_token_provider: SemanticTokenProvider::new(),
            workspace_roots: RwLock::new(Vec::new()),
            settings: Arc::new(RwLock::new(ServerSettings::default())),
        }
    }

    pub(crate) async fn settings_snapshot(&self) -> ServerSettings {
        self.settings.read().await.clone()
    }

    pub(crate) async fn apply_settings(&self, settings: ServerSettings) {
        self.project.lock().await.set_locale(settings.locale);
        *self.settings.write().await = settings;
    }
}
