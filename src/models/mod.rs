pub mod product;
pub mod timestamp;
pub mod user_role;
