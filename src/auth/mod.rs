pub mod identity;
pub mod jwt;

pub use identity::Identity;
