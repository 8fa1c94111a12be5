//! Filter option lists for populating the sidebar controls

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Available values per filter dimension, plus dataset summary counts
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub channels: Vec<String>,
    pub countries: Vec<String>,
    pub priorities: Vec<String>,
    pub week_min: u32,
    pub week_max: u32,
    pub weekly_lead_count: usize,
    pub transaction_lead_count: usize,
}

/// GET /api/filters
///
/// Returns the sorted distinct values for each sidebar filter and the
/// dataset week bounds for the range slider.
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptionsResponse> {
    let dataset = &state.dataset;
    Json(FilterOptionsResponse {
        channels: dataset.channels.clone(),
        countries: dataset.countries.clone(),
        priorities: dataset.priorities.clone(),
        week_min: dataset.week_min,
        week_max: dataset.week_max,
        weekly_lead_count: dataset.weekly_leads.len(),
        transaction_lead_count: dataset.leads.len(),
    })
}
