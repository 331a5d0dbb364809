//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, parsed product submissions and session data structures.

pub mod app;
pub mod db;
pub mod product;
pub mod session;
