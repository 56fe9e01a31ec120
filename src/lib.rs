//! json-localizer
//!
//! Per-locale message tables loaded from flat JSON objects, with
//! fallback lookup and `{name}` placeholder formatting.

pub mod config;
pub mod error;
pub mod format;
pub mod locale;
pub mod resource;
pub mod shared;
pub mod store;
pub mod table;

pub use config::{
    ConfigError,
    LocalizerSettings,
    MessageDefaults,
};
pub use error::LocalizerError;
pub use locale::Locale;
pub use resource::{
    DirectoryResolver,
    EmbeddedResolver,
    ResourceResolver,
};
pub use shared::SharedTranslationStore;
pub use store::TranslationStore;
pub use table::TranslationTable;
