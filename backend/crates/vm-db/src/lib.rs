pub mod collection;
pub mod error;
pub mod repositories;
pub mod stored_document;

pub use collection::Collection;
pub use error::{DbError, Result};
pub use repositories::document_repository::DocumentRepository;
pub use stored_document::StoredDocument;

use sqlx::migrate::Migrator;

/// Schema migrations embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
