pub mod admin_product;
pub mod product;
