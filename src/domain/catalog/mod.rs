pub mod error;
pub mod model;
pub mod service;

pub use error::CatalogError;
pub use model::{LanguageEntry, LanguagePage};
pub use service::{VoiceCatalog, HOME_TITLE};
