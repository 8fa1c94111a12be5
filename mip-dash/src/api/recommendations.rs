//! Recommendations page endpoint: the four static strategy cards

use axum::Json;
use serde::Serialize;

/// One strategic recommendation card
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub action: &'static str,
    pub rationale: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

/// GET /api/recommendations
pub async fn get_recommendations() -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        recommendations: vec![
            Recommendation {
                title: "Budget Reallocation",
                action: "Shift 20% of Social Media budget to Google Search",
                rationale: "Google Search delivers better CPQL",
                impact: "25-30% reduction in overall CPQL",
            },
            Recommendation {
                title: "Geographic Diversification",
                action: "Reduce Lebanon dependency to <35%",
                rationale: "Lebanon = 43% of leads (concentration risk)",
                impact: "More stable lead flow",
            },
            Recommendation {
                title: "Creative Optimization",
                action: "Scale Post1 & Post4, pause Post8",
                rationale: "Post1 has highest ROI (3.11)",
                impact: "15-20% improvement in creative ROI",
            },
            Recommendation {
                title: "Quality Focus",
                action: "Prioritize qualification rate over volume",
                rationale: "Current 11.3% rate needs improvement",
                impact: "Better ROI on marketing spend",
            },
        ],
    })
}
