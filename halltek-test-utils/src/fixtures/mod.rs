//! Database fixtures inserted directly through the entities.

pub mod product;
pub mod user;
