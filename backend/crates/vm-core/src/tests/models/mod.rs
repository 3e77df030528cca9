mod document;
mod document_id;
mod role;
mod volunteer_credential;
