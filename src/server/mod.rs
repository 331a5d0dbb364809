//! Server application core modules.
//!
//! HTTP routing, session authentication, the product catalogue and file uploads for the
//! Halltek storefront.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
pub mod view;
