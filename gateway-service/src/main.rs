use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod error;
mod models;
mod routes;
mod services;

use routes::{
    describe::describe_book, health::health_check, search::search_books, AppState,
};
use services::catalog::OpenLibraryProvider;
use services::description::GeminiProvider;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("gateway_service=info,tower_http=info")
        .init();

    let api_key = std::env::var("GEMINI_APIKEY").ok();
    if api_key.is_none() {
        warn!("GEMINI_APIKEY not set, describe requests will fail");
    }

    let state = AppState {
        books: Arc::new(OpenLibraryProvider::new()),
        descriptions: Arc::new(GeminiProvider::new(api_key)),
    };

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let app = Router::new()
        .route("/status", get(health_check))
        .route("/api/search", get(search_books))
        .route("/api/describe-book", post(describe_book))
        .fallback_service(ServeDir::new(&static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Gateway service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
