pub mod completion;
pub mod definition;
pub mod document;
pub mod hover;
pub mod project;
pub mod qtn;
pub mod semantic_tokens;
pub mod server;
pub mod symbols;
pub mod syntax;
pub mod text_pos;

pub use completion::CompletionProvider;
pub use definition::DefinitionProvider;
pub use hover::HoverProvider;
pub use project::ProjectModel;
pub use semantic_tokens::SemanticTokenProvider;
pub use server::QtnLanguageServer;
pub use symbols::{SymbolInfo, SymbolSource, SymbolTable};
pub use syntax::{parse, tokenize, QtnDocument};
