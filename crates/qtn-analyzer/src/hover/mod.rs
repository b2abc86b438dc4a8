pub mod provider;

pub use self::provider::HoverProvider;
