mod current_user;
mod error;
mod guard;
