//! Data transfer objects shared by the JSON API and its OpenAPI document.

pub mod api;
pub mod product;
pub mod session;
