use tower_lsp::lsp_types::{Url, WorkspaceFolder};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Find every `.qtn` file under the workspace roots and return its URI and
/// content. Unreadable entries are skipped with a log line; the scan itself
/// never fails.
pub(crate) fn scan_qtn_files(roots: &[WorkspaceFolder]) -> Vec<(Url, String)> {
    let mut files = Vec::new();

    for folder in roots {
        let root = match folder.uri.to_file_path() {
            Ok(path) => path,
            Err(()) => {
                warn!("Skipping non-file workspace root {}", folder.uri);
                continue;
            }
        };

        for entry in WalkDir::new(&root).into_iter().filter_map(Result::ok) {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("qtn") {
                continue;
            }

            let uri = match Url::from_file_path(path) {
                Ok(uri) => uri,
                Err(()) => continue,
            };
            match std::fs::read_to_string(path) {
                Ok(text) => files.push((uri, text)),
                Err(err) => {
                    debug!("Skipping unreadable {}: {err}", path.display());
                }
            }
        }
    }

    files
}
