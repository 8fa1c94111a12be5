//! Overview KPI card values

use serde::Serialize;
use std::collections::HashSet;

use super::{pct, round_to};
use crate::data::{ChannelCost, WeeklyLead};

/// The eight Overview KPI cards
#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    pub total_budget_usd: f64,
    pub total_leads: usize,
    pub qualified_leads: usize,
    pub reachable_leads: usize,
    pub qualification_rate_pct: f64,
    pub reachability_rate_pct: f64,
    pub avg_cpl_usd: f64,
    pub avg_cpql_usd: f64,
    pub weeks_in_view: usize,
    pub countries_in_view: usize,
}

/// Compute the KPI summary for a filtered lead set
///
/// Budget comes from the combined channel-cost table, which is not subject
/// to the sidebar filters; CPL/CPQL therefore relate total spend to the
/// filtered lead counts.
pub fn kpi_summary(leads: &[&WeeklyLead], channel_costs: &[ChannelCost]) -> KpiSummary {
    let total_budget: f64 = channel_costs
        .iter()
        .filter_map(|row| row.budget_usd)
        .sum();

    let total_leads = leads.len();
    let qualified_leads = leads.iter().filter(|l| l.is_qualified).count();
    let reachable_leads = leads.iter().filter(|l| l.is_reachable).count();

    let avg_cpl = if total_leads > 0 {
        total_budget / total_leads as f64
    } else {
        0.0
    };
    let avg_cpql = if qualified_leads > 0 {
        total_budget / qualified_leads as f64
    } else {
        0.0
    };

    let weeks_in_view = leads
        .iter()
        .map(|l| l.week_num)
        .collect::<HashSet<_>>()
        .len();
    let countries_in_view = leads
        .iter()
        .map(|l| l.country.as_str())
        .collect::<HashSet<_>>()
        .len();

    KpiSummary {
        total_budget_usd: round_to(total_budget, 2),
        total_leads,
        qualified_leads,
        reachable_leads,
        qualification_rate_pct: round_to(pct(qualified_leads as f64, total_leads as f64), 1),
        reachability_rate_pct: round_to(pct(reachable_leads as f64, total_leads as f64), 1),
        avg_cpl_usd: round_to(avg_cpl, 2),
        avg_cpql_usd: round_to(avg_cpql, 2),
        weeks_in_view,
        countries_in_view,
    }
}
