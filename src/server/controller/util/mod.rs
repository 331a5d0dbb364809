//! Helpers shared by the HTTP handlers.

pub mod get_user;
pub mod multipart;
pub mod redirect;
