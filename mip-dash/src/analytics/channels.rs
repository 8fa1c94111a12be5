//! Channel-level aggregates: mix, qualification rates, and the
//! Google Search vs Social Media cost-efficiency comparison

use serde::Serialize;
use std::collections::HashMap;

use super::{pct, round_to};
use crate::data::{ChannelCost, WeeklyLead};

/// Channel name as it appears in the lead tables
pub const GOOGLE_SEARCH: &str = "Google Search";
pub const SOCIAL_MEDIA: &str = "Social Media";

// The cost exports spell the channel with an underscore; the lead tables
// use a space. Both spellings are fixed in the source files.
const GOOGLE_SEARCH_COST: &str = "Google_Search";
const SOCIAL_MEDIA_COST: &str = "Social_Media";

/// One slice of the channel-mix donut
#[derive(Debug, Clone, Serialize)]
pub struct ChannelMixSlice {
    pub channel: String,
    pub leads: usize,
    pub share_pct: f64,
}

/// Qualification rate for one channel
#[derive(Debug, Clone, Serialize)]
pub struct ChannelQualification {
    pub channel: String,
    pub qualified: usize,
    pub total: usize,
    pub rate_pct: f64,
}

/// Cost metrics for one side of the efficiency comparison
#[derive(Debug, Clone, Serialize)]
pub struct ChannelCostSummary {
    pub channel: String,
    pub budget_usd: f64,
    pub leads: usize,
    pub qualified: usize,
    pub cpl_usd: f64,
    pub cpql_usd: f64,
}

/// The "channel efficiency paradox" chart: CPL vs CPQL per channel
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyComparison {
    pub google_search: ChannelCostSummary,
    pub social_media: ChannelCostSummary,
    /// Social Media CPQL divided by Google Search CPQL
    pub cpql_efficiency_ratio: f64,
}

/// Lead count per channel, largest share first
pub fn channel_mix(leads: &[&WeeklyLead]) -> Vec<ChannelMixSlice> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for lead in leads {
        *counts.entry(lead.channel.as_str()).or_default() += 1;
    }

    let total = leads.len();
    let mut slices: Vec<ChannelMixSlice> = counts
        .into_iter()
        .map(|(channel, count)| ChannelMixSlice {
            channel: channel.to_string(),
            leads: count,
            share_pct: round_to(pct(count as f64, total as f64), 1),
        })
        .collect();
    slices.sort_by(|a, b| b.leads.cmp(&a.leads).then(a.channel.cmp(&b.channel)));
    slices
}

/// Qualification rate per channel, lowest rate first
pub fn channel_qualification(leads: &[&WeeklyLead]) -> Vec<ChannelQualification> {
    let mut totals: HashMap<&str, (usize, usize)> = HashMap::new();
    for lead in leads {
        let entry = totals.entry(lead.channel.as_str()).or_default();
        entry.1 += 1;
        if lead.is_qualified {
            entry.0 += 1;
        }
    }

    let mut rates: Vec<ChannelQualification> = totals
        .into_iter()
        .map(|(channel, (qualified, total))| ChannelQualification {
            channel: channel.to_string(),
            qualified,
            total,
            rate_pct: round_to(pct(qualified as f64, total as f64), 2),
        })
        .collect();
    rates.sort_by(|a, b| {
        a.rate_pct
            .partial_cmp(&b.rate_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.channel.cmp(&b.channel))
    });
    rates
}

/// Compare Google Search and Social Media on CPL vs CPQL
///
/// Budget per channel comes from the unfiltered cost table; lead counts come
/// from the filtered set.
pub fn efficiency_comparison(
    leads: &[&WeeklyLead],
    channel_costs: &[ChannelCost],
) -> EfficiencyComparison {
    let google_search = cost_summary(leads, channel_costs, GOOGLE_SEARCH, GOOGLE_SEARCH_COST);
    let social_media = cost_summary(leads, channel_costs, SOCIAL_MEDIA, SOCIAL_MEDIA_COST);

    let ratio = if google_search.cpql_usd > 0.0 {
        social_media.cpql_usd / google_search.cpql_usd
    } else {
        0.0
    };

    EfficiencyComparison {
        google_search,
        social_media,
        cpql_efficiency_ratio: round_to(ratio, 1),
    }
}

fn cost_summary(
    leads: &[&WeeklyLead],
    channel_costs: &[ChannelCost],
    lead_name: &str,
    cost_name: &str,
) -> ChannelCostSummary {
    let budget: f64 = channel_costs
        .iter()
        .filter(|row| row.channel.as_deref() == Some(cost_name))
        .filter_map(|row| row.budget_usd)
        .sum();

    let total = leads.iter().filter(|l| l.channel == lead_name).count();
    let qualified = leads
        .iter()
        .filter(|l| l.channel == lead_name && l.is_qualified)
        .count();

    let cpl = if total > 0 { budget / total as f64 } else { 0.0 };
    let cpql = if qualified > 0 {
        budget / qualified as f64
    } else {
        0.0
    };

    ChannelCostSummary {
        channel: lead_name.to_string(),
        budget_usd: round_to(budget, 2),
        leads: total,
        qualified,
        cpl_usd: round_to(cpl, 2),
        cpql_usd: round_to(cpql, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{cost, lead};

    fn sample() -> Vec<crate::data::WeeklyLead> {
        vec![
            lead("L1", GOOGLE_SEARCH, "Lebanon", 1, true, true),
            lead("L2", GOOGLE_SEARCH, "Jordan", 2, true, true),
            lead("L3", SOCIAL_MEDIA, "Lebanon", 1, false, true),
            lead("L4", SOCIAL_MEDIA, "Jordan", 2, false, false),
            lead("L5", SOCIAL_MEDIA, "Jordan", 3, true, true),
        ]
    }

    #[test]
    fn test_channel_mix_orders_by_share() {
        let leads = sample();
        let refs: Vec<&_> = leads.iter().collect();
        let mix = channel_mix(&refs);
        assert_eq!(mix.len(), 2);
        assert_eq!(mix[0].channel, SOCIAL_MEDIA);
        assert_eq!(mix[0].leads, 3);
        assert_eq!(mix[0].share_pct, 60.0);
        assert_eq!(mix[1].leads, 2);
    }

    #[test]
    fn test_channel_qualification_sorted_ascending() {
        let leads = sample();
        let refs: Vec<&_> = leads.iter().collect();
        let rates = channel_qualification(&refs);
        // Social Media 1/3 ≈ 33.33 < Google Search 2/2 = 100
        assert_eq!(rates[0].channel, SOCIAL_MEDIA);
        assert_eq!(rates[0].rate_pct, 33.33);
        assert_eq!(rates[1].channel, GOOGLE_SEARCH);
        assert_eq!(rates[1].rate_pct, 100.0);
    }

    #[test]
    fn test_efficiency_comparison_maps_cost_table_names() {
        let leads = sample();
        let refs: Vec<&_> = leads.iter().collect();
        let costs = vec![
            cost("Google_Search", 800.0),
            cost("Google_Search", 200.0),
            cost("Social_Media", 300.0),
        ];

        let comparison = efficiency_comparison(&refs, &costs);
        assert_eq!(comparison.google_search.budget_usd, 1000.0);
        assert_eq!(comparison.google_search.cpl_usd, 500.0);
        assert_eq!(comparison.google_search.cpql_usd, 500.0);
        assert_eq!(comparison.social_media.budget_usd, 300.0);
        assert_eq!(comparison.social_media.cpl_usd, 100.0);
        assert_eq!(comparison.social_media.cpql_usd, 300.0);
        // 300 / 500
        assert_eq!(comparison.cpql_efficiency_ratio, 0.6);
    }

    #[test]
    fn test_efficiency_comparison_zero_guard() {
        let comparison = efficiency_comparison(&[], &[]);
        assert_eq!(comparison.google_search.cpl_usd, 0.0);
        assert_eq!(comparison.social_media.cpql_usd, 0.0);
        assert_eq!(comparison.cpql_efficiency_ratio, 0.0);
    }
}
