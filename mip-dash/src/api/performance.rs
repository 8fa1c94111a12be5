//! Performance page endpoints, one per tab
//!
//! Channel, Geographic, and Temporal operate on the filtered lead set;
//! Creative ranks the per-post totals, which the sidebar filters do not
//! reach (post totals carry no channel/country/week dimensions).

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::analytics::channels::{ChannelMixSlice, ChannelQualification};
use crate::analytics::creative::PostRoi;
use crate::analytics::geo::CountryPerformance;
use crate::analytics::temporal::WeeklyPoint;
use crate::analytics::{
    channel_mix, channel_qualification, post_roi_ranking, top_countries, weekly_series,
};
use crate::filter::{self, FilterParams};
use crate::AppState;

use super::{ApiError, EMPTY_RESULT_WARNING};

/// Countries shown on the Performance geographic tab
const GEO_COUNTRY_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
pub struct ChannelPerformanceResponse {
    pub active_filters: Vec<String>,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix: Option<Vec<ChannelMixSlice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<Vec<ChannelQualification>>,
}

#[derive(Debug, Serialize)]
pub struct GeographicPerformanceResponse {
    pub active_filters: Vec<String>,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<CountryPerformance>>,
}

#[derive(Debug, Serialize)]
pub struct CreativePerformanceResponse {
    pub posts: Vec<PostRoi>,
}

#[derive(Debug, Serialize)]
pub struct TemporalPerformanceResponse {
    pub active_filters: Vec<String>,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly: Option<Vec<WeeklyPoint>>,
}

/// GET /api/performance/channel
pub async fn performance_channel(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<ChannelPerformanceResponse>, ApiError> {
    params.validate()?;
    let leads = filter::apply(&state.dataset, &params);

    if leads.is_empty() {
        return Ok(Json(ChannelPerformanceResponse {
            active_filters: params.active_filters(),
            empty: true,
            warning: Some(EMPTY_RESULT_WARNING.to_string()),
            mix: None,
            qualification: None,
        }));
    }

    Ok(Json(ChannelPerformanceResponse {
        active_filters: params.active_filters(),
        empty: false,
        warning: None,
        mix: Some(channel_mix(&leads)),
        qualification: Some(channel_qualification(&leads)),
    }))
}

/// GET /api/performance/geographic
pub async fn performance_geographic(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<GeographicPerformanceResponse>, ApiError> {
    params.validate()?;
    let leads = filter::apply(&state.dataset, &params);

    if leads.is_empty() {
        return Ok(Json(GeographicPerformanceResponse {
            active_filters: params.active_filters(),
            empty: true,
            warning: Some(EMPTY_RESULT_WARNING.to_string()),
            countries: None,
        }));
    }

    Ok(Json(GeographicPerformanceResponse {
        active_filters: params.active_filters(),
        empty: false,
        warning: None,
        countries: Some(top_countries(&leads, GEO_COUNTRY_LIMIT)),
    }))
}

/// GET /api/performance/creative
pub async fn performance_creative(
    State(state): State<AppState>,
) -> Json<CreativePerformanceResponse> {
    Json(CreativePerformanceResponse {
        posts: post_roi_ranking(&state.dataset.post_totals),
    })
}

/// GET /api/performance/temporal
pub async fn performance_temporal(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<TemporalPerformanceResponse>, ApiError> {
    params.validate()?;
    let leads = filter::apply(&state.dataset, &params);

    if leads.is_empty() {
        return Ok(Json(TemporalPerformanceResponse {
            active_filters: params.active_filters(),
            empty: true,
            warning: Some(EMPTY_RESULT_WARNING.to_string()),
            weekly: None,
        }));
    }

    Ok(Json(TemporalPerformanceResponse {
        active_filters: params.active_filters(),
        empty: false,
        warning: None,
        weekly: Some(weekly_series(&leads)),
    }))
}
