pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::document::{Document, ID_FIELD, into_document, with_id};
pub use models::document_id::DocumentId;
pub use models::role::Role;
pub use models::volunteer_credential::VolunteerCredential;

#[cfg(test)]
mod tests;
