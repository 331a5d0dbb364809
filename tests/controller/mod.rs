//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a session from the test context, the full router is
//! covered in `router.rs`.

mod auth;
mod page;
mod product;
mod session;
