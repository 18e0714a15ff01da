// src/main.rs
mod config;
mod database;
mod dtos;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use axum::routing::get;
use dotenvy::dotenv;
use http::{HeaderValue, Method};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tracing_subscriber::fmt::init as tracing_init;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();
    let config = config::Config::from_env();

    // Create database pool (lazy; readiness is gated below)
    let db_pool = database::create_pool(&config.database_url)
        .expect("Failed to create database pool");

    if config.test_mode {
        tracing::info!("TEST_MODE set, skipping schema initialization");
    } else {
        // The service must not accept traffic against an unreachable store.
        if let Err(e) = database::init_schema_with_retry(&db_pool).await {
            tracing::error!(error = %e, "Database never became reachable, refusing to start");
            std::process::exit(1);
        }
        if config.seed_on_startup {
            if let Err(e) = database::seed_products(&db_pool).await {
                tracing::error!(error = %e, "Failed to seed product table");
                std::process::exit(1);
            }
        }
    }

    let app_state = state::AppState::new(db_pool);

    let app = routes::create_router()
        .route("/", get(greet))
        .layer(cors_layer(&config.cors_origins))
        .with_state(app_state);

    let addr = SocketAddr::from((config.host, config.port));
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => {
            tracing::info!("Server running on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
    }
}

async fn greet() -> &'static str {
    "Welcome to telusko Trac"
}

/// With no configured origins every origin is allowed (wildcard, no
/// credentials). An explicit allow-list also enables credentials; the
/// wildcard cannot, so methods and headers are mirrored per request in
/// that branch instead of using `Any`.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parse_allowed_origins(origins)))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn parse_allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
