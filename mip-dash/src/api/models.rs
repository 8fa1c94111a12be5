//! Models page endpoint
//!
//! The model scorecards are fixed results from the offline analysis; no
//! model runs here. Values are reported as strings exactly as published.

use axum::Json;
use serde::Serialize;

/// One metric tile on a model scorecard
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// One model scorecard tab
#[derive(Debug, Clone, Serialize)]
pub struct ModelScorecard {
    pub title: &'static str,
    pub best_model: &'static str,
    pub metrics: Vec<ModelMetric>,
    pub insight_title: &'static str,
    pub insight: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub qualification: ModelScorecard,
    pub forecasting: ModelScorecard,
}

/// GET /api/models
pub async fn get_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        qualification: ModelScorecard {
            title: "Lead Qualification Model",
            best_model: "Random Forest + ADASYN",
            metrics: vec![
                ModelMetric {
                    label: "F1-Score",
                    value: "0.40",
                    note: "+6% vs baseline",
                },
                ModelMetric {
                    label: "ROC-AUC",
                    value: "0.76",
                    note: "Good discrimination",
                },
                ModelMetric {
                    label: "Recall",
                    value: "57%",
                    note: "Catches majority",
                },
            ],
            insight_title: "Model Insights",
            insight: "The model identifies is_reachable as the top predictor. Leads from \
                      Google Search and Lebanon have higher qualification probability.",
        },
        forecasting: ModelScorecard {
            title: "Lead Volume Forecasting",
            best_model: "Prophet + Regressors",
            metrics: vec![
                ModelMetric {
                    label: "MAPE",
                    value: "54.2%",
                    note: "Fair accuracy",
                },
                ModelMetric {
                    label: "Improvement",
                    value: "53.8%",
                    note: "vs baseline",
                },
                ModelMetric {
                    label: "8-Week Forecast",
                    value: "235 leads",
                    note: "~29/week",
                },
            ],
            insight_title: "Forecast Note",
            insight: "Limited by 35 weeks of data. Accuracy will improve with more \
                      historical data. Use for directional planning, not precise \
                      predictions.",
        },
    })
}
