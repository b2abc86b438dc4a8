mod handler;
pub mod settings;
pub mod state;
mod workspace;

pub use self::settings::ServerSettings;
pub use self::state::QtnLanguageServer;
