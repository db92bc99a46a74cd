//! Customer management REST backend: CRUD for customers, categories, and
//! contacts over PostgreSQL, plus a typed client for the same API.

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod migration;
pub mod model;
pub mod repo;
pub mod resource;
pub mod response;
pub mod seed;
pub mod state;
pub mod validation;
pub mod handlers;
pub mod routes;

pub use client::{ApiClient, ClientError};
pub use config::Config;
pub use db::{connect, ensure_database_exists};
pub use error::{AppError, ValidationErrors};
pub use migration::apply_migrations;
pub use state::AppState;
pub use routes::{api_routes, common_routes, common_routes_with_ready};
