//! HTTP request handlers.
//!
//! `auth` and `page` serve the HTML pages, `product` and `session` make up the JSON API
//! documented through utoipa.

pub mod auth;
pub mod page;
pub mod product;
pub mod session;
pub mod util;
