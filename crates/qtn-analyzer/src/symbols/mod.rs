pub mod format;
pub mod outline;
pub mod table;
pub mod types;

pub use self::outline::{document_symbols, workspace_symbols};
pub use self::table::SymbolTable;
pub use self::types::{SymbolInfo, SymbolSource};
