//! Service layer for business logic.
//!
//! Services validate input and coordinate repositories with the upload store. Controllers
//! only translate their results into HTTP responses or flashed messages.

pub mod auth;
pub mod product;
