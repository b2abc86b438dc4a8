use tower_lsp::lsp_types::{Location, Position};

use crate::project::ProjectModel;
use crate::text_pos::identifier_at_position;

/// Resolves the identifier under the cursor to its definition location.
/// Builtin type names and unknown identifiers both resolve to nothing.
pub struct DefinitionProvider;

impl DefinitionProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn provide(
        &self,
        text: &str,
        position: Position,
        project: &mut ProjectModel,
    ) -> Option<Location> {
        let word = identifier_at_position(text, position, false)?;
        project.find_definition(&word)
    }
}

impl Default for DefinitionProvider {
    fn default() -> Self {
        Self::new()
    }
}
