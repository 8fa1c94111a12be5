//! mip-dash library - Marketing Intelligence dashboard module
//!
//! Renders pre-computed CSV marketing data as KPI cards and charts behind
//! sidebar filters. The dataset is loaded once at startup and held
//! immutably; every request recomputes its page from the filtered records.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use data::Dataset;

pub mod analytics;
pub mod api;
pub mod data;
pub mod filter;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable dataset, loaded once at startup
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create new application state
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api/filters", get(api::get_filter_options))
        .route("/api/overview", get(api::get_overview))
        .route("/api/performance/channel", get(api::performance_channel))
        .route(
            "/api/performance/geographic",
            get(api::performance_geographic),
        )
        .route("/api/performance/creative", get(api::performance_creative))
        .route("/api/performance/temporal", get(api::performance_temporal))
        .route("/api/models", get(api::get_models))
        .route("/api/recommendations", get(api::get_recommendations))
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/style.css", get(api::serve_style_css))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
