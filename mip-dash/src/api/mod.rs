//! HTTP API handlers for mip-dash

pub mod buildinfo;
pub mod filters;
pub mod health;
pub mod models;
pub mod overview;
pub mod performance;
pub mod recommendations;
pub mod ui;

pub use buildinfo::get_build_info;
pub use filters::get_filter_options;
pub use health::health_routes;
pub use models::get_models;
pub use overview::get_overview;
pub use performance::{
    performance_channel, performance_creative, performance_geographic, performance_temporal,
};
pub use recommendations::get_recommendations;
pub use ui::{serve_app_js, serve_index, serve_style_css};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API errors common to the page endpoints
#[derive(Debug)]
pub enum ApiError {
    InvalidInput(String),
}

impl From<mip_common::Error> for ApiError {
    fn from(err: mip_common::Error) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Warning shown in place of charts when the filters match no records
pub(crate) const EMPTY_RESULT_WARNING: &str =
    "No data matches the current filters. Please adjust your selection.";
