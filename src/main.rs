use soupmate::app::{create_app, init_tracing};
use soupmate::config::{Config, DEFAULT_LOG_FILTER};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(DEFAULT_LOG_FILTER);
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    info!("Starting SoupMate backend...");
    info!("Configuration loaded: {:?}", config);

    let app = create_app(&config);

    let listener = match tokio::net::TcpListener::bind(&config.bind_address()).await {
        Ok(listener) => {
            info!("Server running on {}", config.server_url());
            info!("Health check: GET /api/health");
            info!("Chat endpoint: POST /api/chat");
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };

    info!("Server starting...");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    } else {
        info!("Server shutdown gracefully");
    }
}
