//! Per-country lead aggregates

use serde::Serialize;
use std::collections::HashMap;

use super::{pct, round_to};
use crate::data::WeeklyLead;

/// One row of the country ranking
#[derive(Debug, Clone, Serialize)]
pub struct CountryPerformance {
    pub country: String,
    pub leads: usize,
    pub qualified: usize,
    pub qualification_rate_pct: f64,
}

/// Top N countries by lead count, descending
pub fn top_countries(leads: &[&WeeklyLead], limit: usize) -> Vec<CountryPerformance> {
    let mut totals: HashMap<&str, (usize, usize)> = HashMap::new();
    for lead in leads {
        let entry = totals.entry(lead.country.as_str()).or_default();
        entry.0 += 1;
        if lead.is_qualified {
            entry.1 += 1;
        }
    }

    let mut ranking: Vec<CountryPerformance> = totals
        .into_iter()
        .map(|(country, (total, qualified))| CountryPerformance {
            country: country.to_string(),
            leads: total,
            qualified,
            qualification_rate_pct: round_to(pct(qualified as f64, total as f64), 1),
        })
        .collect();
    ranking.sort_by(|a, b| b.leads.cmp(&a.leads).then_with(|| a.country.cmp(&b.country)));
    ranking.truncate(limit);
    ranking
}
