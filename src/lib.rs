//! Product catalog HTTP API.
//!
//! Reads are public. Creates and updates go through the admin gate: bearer
//! token → identity → `user_roles` lookup → validation → store write.

pub mod app;
pub mod auth;
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod telemetry;

pub use app::build_router;
pub use error::AppError;
pub use state::AppState;
