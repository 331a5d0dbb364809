pub use super::halltek_product::Entity as HalltekProduct;
pub use super::halltek_user::Entity as HalltekUser;
