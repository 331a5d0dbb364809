//! Data access layer repositories.
//!
//! This module contains the database repositories for the application, one per table.
//! Repositories provide a thin abstraction over SeaORM queries and return raw entity models.

pub mod product;
pub mod user;
