pub mod document;
pub mod document_id;
pub mod role;
pub mod volunteer_credential;
