use axum::http::HeaderValue;
use axum::{Server, middleware::from_fn};
use hr_backend::{AppState, config::Config, db, init_tracing, middleware, routes};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    tracing::info!(
        "Starting HR management backend (env: {}, address: {})",
        config.app_env,
        config.server_address()
    );

    let pool = match db::create_db_pool(&config.database()) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {}", e);
            std::process::exit(1);
        }
    };

    let server_address = config.server_address();

    let cors = if config.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let state = AppState::new(pool, config);

    let app = routes::create_router(state)
        .layer(cors)
        .layer(from_fn(middleware::request_tracking_middleware));

    let addr = match server_address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid server address {}: {}", server_address, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on http://{}", addr);

    if let Err(e) = Server::bind(&addr).serve(app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
