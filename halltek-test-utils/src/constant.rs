/// Password used for every user created through the builder
pub const TEST_PASSWORD: &str = "password123";

pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "admin-password";
pub const TEST_ADMIN_EMAIL: &str = "admin@halltek.test";
