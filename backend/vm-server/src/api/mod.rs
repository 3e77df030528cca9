pub mod attendance;
pub mod auth;
pub mod collection;
pub mod error;
pub mod events;
pub mod extractors;
pub mod guard;
pub mod message_response;
pub mod tasks;
pub mod volunteers;
