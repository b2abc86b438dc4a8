pub mod database;
pub mod keywords;
pub mod types;

pub use self::database::{all_keywords, all_types, lookup_attribute, lookup_keyword, lookup_type};
pub use self::types::{AttributeInfo, BuiltinCategory, BuiltinTypeInfo, KeywordInfo, Locale};
