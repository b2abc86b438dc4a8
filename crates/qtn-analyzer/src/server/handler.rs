use std::sync::Arc;

use tower_lsp::{jsonrpc::Result, lsp_types::*, LanguageServer};
use tracing::{debug, info};

use crate::{
    semantic_tokens::get_legend,
    server::{settings::ServerSettings, state::QtnLanguageServer, workspace::scan_qtn_files},
    symbols::{document_symbols, workspace_symbols},
};

#[tower_lsp::async_trait]
impl LanguageServer for QtnLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("Initializing qtn-analyzer...");

        let initial_settings = ServerSettings::from_lsp_payload(params.initialization_options.as_ref());
        self.apply_settings(initial_settings).await;

        if let Some(folders) = params.workspace_folders {
            *self.workspace_roots.write().await = folders;
        } else if let Some(root) = params.root_uri {
            *self.workspace_roots.write().await = vec![WorkspaceFolder {
                uri: root,
                name: "root".to_string(),
            }];
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![
                        ".".to_string(),
                        "<".to_string(),
                        "[".to_string(),
                        "#".to_string(),
                    ]),
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                definition_provider: Some(OneOf::Left(true)),
                document_symbol_provider: Some(OneOf::Left(true)),
                workspace_symbol_provider: Some(OneOf::Left(true)),
                semantic_tokens_provider: Some(SemanticTokensServerCapabilities::SemanticTokensOptions(
                    SemanticTokensOptions {
                        legend: get_legend(),
                        full: Some(SemanticTokensFullOptions::Bool(true)),
                        range: Some(false),
                        work_done_progress_options: Default::default(),
                    },
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "qtn-analyzer".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("qtn-analyzer initialized");

        let roots = self.workspace_roots.read().await.clone();
        if roots.is_empty() {
            return;
        }

        // Index every .qtn file in the workspace in the background so
        // cross-file symbols resolve before their documents are opened.
        let project = Arc::clone(&self.project);
        tokio::spawn(async move {
            let files = tokio::task::spawn_blocking(move || scan_qtn_files(&roots))
                .await
                .unwrap_or_default();
            let count = files.len();
            let mut project = project.lock().await;
            for (uri, text) in files {
                project.update_document(uri, &text);
            }
            info!("Indexed {count} workspace .qtn files");
        });
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        let current = self.settings_snapshot().await;
        let merged = current.merged_with_payload(&params.settings);
        if merged == current {
            return;
        }
        self.apply_settings(merged).await;
        info!("Applied updated qtn-analyzer settings");
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down qtn-analyzer");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;
        let version = params.text_document.version;
        debug!("Opened {uri} (v{version}, {} bytes)", text.len());

        self.document_store.open(uri.clone(), text.clone(), version);
        self.project.lock().await.update_document(uri, &text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // Full-text sync: the last change carries the whole document.
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };
        self.document_store.update(uri.clone(), change.text.clone(), version);
        self.project.lock().await.update_document(uri, &change.text);
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.document_store.close(&uri);

        // Keep symbols of still-existing files available project-wide by
        // re-reading from disk; drop documents whose file is gone.
        let on_disk = uri
            .to_file_path()
            .ok()
            .and_then(|path| std::fs::read_to_string(path).ok());
        let mut project = self.project.lock().await;
        match on_disk {
            Some(text) => project.update_document(uri, &text),
            None => project.remove_document(&uri),
        }
    }

    async fn did_change_watched_files(&self, params: DidChangeWatchedFilesParams) {
        let mut project = self.project.lock().await;
        for change in params.changes {
            if !change.uri.path().ends_with(".qtn") {
                continue;
            }

            match change.typ {
                FileChangeType::DELETED => project.remove_document(&change.uri),
                FileChangeType::CREATED | FileChangeType::CHANGED => {
                    // Open documents sync through did_change; this path covers
                    // external edits to files the editor has not opened.
                    if self.document_store.get_content(&change.uri).is_some() {
                        continue;
                    }
                    let on_disk = change
                        .uri
                        .to_file_path()
                        .ok()
                        .and_then(|path| std::fs::read_to_string(path).ok());
                    if let Some(text) = on_disk {
                        project.update_document(change.uri, &text);
                    }
                }
                _ => {}
            }
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };

        let mut project = self.project.lock().await;
        let items = self.completion_provider.provide(&text, position, &mut project);
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };

        let mut project = self.project.lock().await;
        Ok(self.hover_provider.provide(&text, position, &mut project))
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };

        let mut project = self.project.lock().await;
        let location = self.definition_provider.provide(&text, position, &mut project);
        Ok(location.map(GotoDefinitionResponse::Scalar))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;
        let project = self.project.lock().await;
        let Some(doc) = project.get_document(&uri) else {
            return Ok(None);
        };
        Ok(Some(DocumentSymbolResponse::Nested(document_symbols(doc))))
    }

    async fn symbol(
        &self,
        params: WorkspaceSymbolParams,
    ) -> Result<Option<Vec<SymbolInformation>>> {
        let mut project = self.project.lock().await;
        let (documents, table) = project.documents_and_table();
        Ok(Some(workspace_symbols(documents, table, &params.query)))
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let uri = params.text_document.uri;
        let include_builtins = self.settings_snapshot().await.semantic_tokens.include_builtins;

        let mut project = self.project.lock().await;
        let (doc, table) = project.document_and_table(&uri);
        let Some(doc) = doc else {
            return Ok(None);
        };

        let data = self.semantic_token_provider.provide(doc, table, include_builtins);
        Ok(Some(SemanticTokensResult::Tokens(SemanticTokens {
            result_id: None,
            data,
        })))
    }
}
