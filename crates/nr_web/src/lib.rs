use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub mod handlers;
pub mod state;
pub mod templates;
pub mod view;

pub use state::AppState;

/// Every page is rendered per request; nothing may be cached downstream.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/article", get(handlers::article_page))
        .fallback(handlers::not_found)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
