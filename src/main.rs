//! predictor-session entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Select the persisted-field backend (Redis if configured, else memory)
//! 3. Restore the session from the persisted fields
//! 4. Build router with API and dashboard routes + the static frontend
//! 5. Apply security headers middleware
//! 6. Start Axum server

use predictor_session::{
    auth::{AppState, Authenticator, SessionStore, StaticCredentials},
    cleanup,
    config::Config,
    middleware::security_headers,
    routes,
    storage::{FieldBackend, MemoryFieldStore, RedisFieldStore},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config from environment
    let config = Config::from_env().expect("Failed to load config");
    tracing::info!("Starting predictor-session on {}", config.bind_addr);

    let backend = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str()).expect("Invalid Redis URL");
            // Verify Redis connection
            client
                .get_multiplexed_async_connection()
                .await
                .expect("Failed to connect to Redis");
            FieldBackend::Redis(RedisFieldStore::new(
                client,
                config.redis_key_prefix.clone(),
            ))
        }
        None => {
            let store = MemoryFieldStore::new();
            tokio::spawn(cleanup::run_sweep_loop(
                store.clone(),
                config.sweep_interval(),
            ));
            FieldBackend::Memory(store)
        }
    };
    tracing::info!(backend = backend.name(), "Persisted field backend selected");

    let sessions = SessionStore::restore(&backend)
        .await
        .expect("Failed to read persisted session");
    let auth = Authenticator::new(backend, StaticCredentials::default(), Arc::new(sessions))
        .with_ttl(config.session_ttl());

    // Build shared state
    let state = AppState {
        auth: Arc::new(auth),
    };

    // Single-origin deployment: no cross-origin requests are allowed.
    let cors = CorsLayer::new();

    let app = routes::api_router()
        .fallback_service(routes::frontend(&config.static_dir))
        .layer(cors)
        .layer(axum::middleware::from_fn(security_headers))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
