use axum::{Router, http::HeaderValue};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::routes::create_routes;

/// Parses a log filter directive, falling back to the default one
pub fn log_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}", filter, e);
        DEFAULT_LOG_FILTER.into()
    })
}

/// Initialize tracing and logging for the application
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(log_filter(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// Credentialed CORS forbids wildcards, so methods and headers are mirrored.
fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);
    match origin.parse::<HeaderValue>() {
        Ok(value) => cors.allow_origin(value),
        Err(e) => {
            warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
            cors
        }
    }
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(config: &Config) -> Router {
    info!("Initializing application router");
    info!("Allowing browser requests from {}", config.cors_origin);

    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origin))
}
