//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models so signatures across the server do not
//! need to reach into the generated `entity` crate directly.

/// Registered user account.
///
/// # Fields (from `entity::halltek_user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login name
/// - `email` - Unique, lower-cased email address
/// - `password_hash` - Argon2 PHC string
/// - `is_admin` - Whether the account has admin privileges
/// - `created_at` - Timestamp when the account was registered
pub type UserModel = entity::halltek_user::Model;

/// Product in the catalogue.
///
/// # Fields (from `entity::halltek_product::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `description` - Free text, may be empty
/// - `price` - Non-negative price
/// - `image` - Public URL of the product image (nullable)
/// - `font_family` - CSS font family used on the product card (nullable)
/// - `font_file` - Public URL of an uploaded font file (nullable)
/// - `created_at` - Timestamp when the product was created
/// - `updated_at` - Timestamp of the last update
pub type ProductModel = entity::halltek_product::Model;
