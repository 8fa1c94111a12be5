//! Overview page endpoint: KPI cards plus the three headline charts

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::analytics::channels::EfficiencyComparison;
use crate::analytics::geo::CountryPerformance;
use crate::analytics::kpi::KpiSummary;
use crate::analytics::temporal::WeeklyPoint;
use crate::analytics::{efficiency_comparison, kpi_summary, top_countries, weekly_series};
use crate::filter::{self, FilterParams};
use crate::AppState;

use super::{ApiError, EMPTY_RESULT_WARNING};

/// Countries shown on the Overview ranking
const OVERVIEW_COUNTRY_LIMIT: usize = 5;

/// Overview page payload
///
/// When the filters match no records, `empty` is set, `warning` carries the
/// banner text, and the chart sections are absent.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub active_filters: Vec<String>,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpis: Option<KpiSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_efficiency: Option<EfficiencyComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_trend: Option<Vec<WeeklyPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_countries: Option<Vec<CountryPerformance>>,
}

/// GET /api/overview
pub async fn get_overview(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<OverviewResponse>, ApiError> {
    params.validate()?;

    let dataset = &state.dataset;
    let leads = filter::apply(dataset, &params);

    if leads.is_empty() {
        return Ok(Json(OverviewResponse {
            active_filters: params.active_filters(),
            empty: true,
            warning: Some(EMPTY_RESULT_WARNING.to_string()),
            kpis: None,
            channel_efficiency: None,
            weekly_trend: None,
            top_countries: None,
        }));
    }

    Ok(Json(OverviewResponse {
        active_filters: params.active_filters(),
        empty: false,
        warning: None,
        kpis: Some(kpi_summary(&leads, &dataset.channel_costs)),
        channel_efficiency: Some(efficiency_comparison(&leads, &dataset.channel_costs)),
        weekly_trend: Some(weekly_series(&leads)),
        top_countries: Some(top_countries(&leads, OVERVIEW_COUNTRY_LIMIT)),
    }))
}
