//! Test utilities for the Halltek server.
//!
//! Tests describe the environment they need through [`TestBuilder`] and receive a
//! [`TestContext`] with an in-memory SQLite database, a session backed by a memory store and
//! a temporary upload directory.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME, TEST_PASSWORD},
        TestBuilder, TestContext, TestError,
    };
}
