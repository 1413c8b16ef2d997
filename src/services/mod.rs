pub mod admin_product;
pub mod catalog;
pub mod role;

pub use admin_product::AdminProductService;
pub use catalog::CatalogService;
pub use role::{AdminGrant, RoleResolver};
