//! SeaORM entities for the Halltek storefront tables.

pub mod prelude;

pub mod halltek_product;
pub mod halltek_user;
