//! Declarative test builder.
//!
//! The builder pattern allows chaining multiple configuration methods together, with all
//! operations queued and executed during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    include_user_tables: bool,
    include_product_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, String, String, bool)>, // (username, email, password, is_admin)
    products: Vec<(String, f64)>,               // (name, price)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_user_tables: false,
            include_product_tables: false,
            users: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Add the user table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the product table to the test database.
    pub fn with_product_tables(mut self) -> Self {
        self.include_product_tables = true;
        self
    }

    /// Insert a regular user into the database.
    ///
    /// The password is stored as an argon2 hash so it can be used to log in.
    pub fn with_user(
        mut self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.users
            .push((username.into(), email.into(), password.into(), false));
        self
    }

    /// Insert a user flagged as admin in the database.
    pub fn with_admin_user(
        mut self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.users
            .push((username.into(), email.into(), password.into(), true));
        self
    }

    /// Insert a product with an empty description and no files.
    ///
    /// Products are inserted in call order, each one newer than the last.
    pub fn with_product(mut self, name: impl Into<String>, price: f64) -> Self {
        self.products.push((name.into(), price));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::HalltekUser));
        }

        if self.include_product_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::HalltekProduct));
        }

        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (username, email, password, is_admin) in self.users {
            setup
                .user()
                .insert_user(&username, &email, &password, is_admin)
                .await?;
        }

        for (name, price) in self.products {
            setup.product().insert_product(&name, price).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
