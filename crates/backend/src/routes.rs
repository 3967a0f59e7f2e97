use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{handlers, AppState};
use crate::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D100 Sales Performance
        .route(
            "/api/d100/performance",
            get(handlers::d100_sales_performance::get_performance),
        )
        .route(
            "/api/d100/options",
            get(handlers::d100_sales_performance::get_filter_options),
        )
        // D101 Sales Overview
        .route(
            "/api/d101/overview",
            post(handlers::d101_sales_overview::get_overview),
        )
        .route(
            "/api/d101/overview/export",
            post(handlers::d101_sales_overview::export_overview),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
