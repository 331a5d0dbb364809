//! Halltek storefront: session-authenticated web application with a product catalogue API.

pub mod model;
pub mod server;
