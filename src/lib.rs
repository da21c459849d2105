pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

// Re-export key functions for convenience
pub use api::{ApiService, HttpApiService};
pub use app::{create_app, init_tracing};
