pub mod provider;

pub use self::provider::DefinitionProvider;
