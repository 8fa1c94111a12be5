//! Sidebar filter application
//!
//! Four sequential predicates over the weekly lead table: channel equality,
//! country equality, market-priority equality (via the country attribute
//! join), and an inclusive week-number range. The string dimensions use the
//! sentinel `"All"` meaning "do not filter".

use mip_common::{Error, Result};
use serde::Deserialize;

use crate::data::{Dataset, WeeklyLead};

/// Sentinel value meaning "do not filter this dimension"
pub const ALL: &str = "All";

fn all_sentinel() -> String {
    ALL.to_string()
}

/// Filter parameters, deserialized from the page-endpoint query string
#[derive(Debug, Clone, Deserialize)]
pub struct FilterParams {
    #[serde(default = "all_sentinel")]
    pub channel: String,
    #[serde(default = "all_sentinel")]
    pub country: String,
    #[serde(default = "all_sentinel")]
    pub priority: String,
    /// Inclusive lower week bound; defaults to the dataset minimum
    #[serde(default)]
    pub week_min: Option<u32>,
    /// Inclusive upper week bound; defaults to the dataset maximum
    #[serde(default)]
    pub week_max: Option<u32>,
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            channel: all_sentinel(),
            country: all_sentinel(),
            priority: all_sentinel(),
            week_min: None,
            week_max: None,
        }
    }
}

impl FilterParams {
    /// Reject an inverted week range
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.week_min, self.week_max) {
            if min > max {
                return Err(Error::InvalidInput(format!(
                    "week_min ({}) greater than week_max ({})",
                    min, max
                )));
            }
        }
        Ok(())
    }

    /// Human-readable descriptions of the active (non-sentinel) dimension
    /// filters, for the UI's active-filter banner
    pub fn active_filters(&self) -> Vec<String> {
        let mut active = Vec::new();
        if self.channel != ALL {
            active.push(format!("Channel: {}", self.channel));
        }
        if self.country != ALL {
            active.push(format!("Country: {}", self.country));
        }
        if self.priority != ALL {
            active.push(format!("Priority: {}", self.priority));
        }
        active
    }
}

/// Apply the filters to the weekly lead table
///
/// Records whose country has no attribute row carry no market priority and
/// never match a concrete priority filter.
pub fn apply<'a>(dataset: &'a Dataset, params: &FilterParams) -> Vec<&'a WeeklyLead> {
    let week_min = params.week_min.unwrap_or(dataset.week_min);
    let week_max = params.week_max.unwrap_or(dataset.week_max);

    dataset
        .weekly_leads
        .iter()
        .filter(|lead| params.channel == ALL || lead.channel == params.channel)
        .filter(|lead| params.country == ALL || lead.country == params.country)
        .filter(|lead| {
            params.priority == ALL
                || lead.market_priority.as_deref() == Some(params.priority.as_str())
        })
        .filter(|lead| lead.week_num >= week_min && lead.week_num <= week_max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::records::{CountryAttribute, WeeklyLead};

    fn lead(id: &str, channel: &str, country: &str, week: u32, qualified: bool) -> WeeklyLead {
        WeeklyLead {
            lead_id: id.to_string(),
            channel: channel.to_string(),
            country: country.to_string(),
            week_number: format!("Week {}", week),
            is_qualified: qualified,
            is_reachable: true,
            week_num: week,
            market_priority: match country {
                "Lebanon" => Some("Tier 1".to_string()),
                "Jordan" => Some("Tier 2".to_string()),
                _ => None,
            },
            region: None,
        }
    }

    fn dataset() -> Dataset {
        let weekly_leads = vec![
            lead("L1", "Google Search", "Lebanon", 1, true),
            lead("L2", "Google Search", "Jordan", 2, false),
            lead("L3", "Social Media", "Lebanon", 3, false),
            lead("L4", "Social Media", "Unknownia", 4, true),
            lead("L5", "Google Search", "Lebanon", 4, true),
        ];
        Dataset {
            weekly_leads,
            leads: vec![],
            channel_costs: vec![],
            country_attributes: vec![
                CountryAttribute {
                    country: "Lebanon".to_string(),
                    market_priority: "Tier 1".to_string(),
                    region: None,
                },
                CountryAttribute {
                    country: "Jordan".to_string(),
                    market_priority: "Tier 2".to_string(),
                    region: None,
                },
            ],
            post_totals: vec![],
            post_regional: vec![],
            weekly_channel_summary: vec![],
            week_min: 1,
            week_max: 4,
            channels: vec!["Google Search".to_string(), "Social Media".to_string()],
            countries: vec!["Jordan".to_string(), "Lebanon".to_string()],
            priorities: vec!["Tier 1".to_string(), "Tier 2".to_string()],
        }
    }

    #[test]
    fn test_all_sentinel_returns_unfiltered_set() {
        let ds = dataset();
        let result = apply(&ds, &FilterParams::default());
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_channel_filter_retains_only_matching_records() {
        let ds = dataset();
        let params = FilterParams {
            channel: "Social Media".to_string(),
            ..Default::default()
        };
        let result = apply(&ds, &params);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|l| l.channel == "Social Media"));
    }

    #[test]
    fn test_country_filter_retains_only_matching_records() {
        let ds = dataset();
        let params = FilterParams {
            country: "Lebanon".to_string(),
            ..Default::default()
        };
        let result = apply(&ds, &params);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|l| l.country == "Lebanon"));
    }

    #[test]
    fn test_priority_filter_uses_country_join() {
        let ds = dataset();
        let params = FilterParams {
            priority: "Tier 2".to_string(),
            ..Default::default()
        };
        let result = apply(&ds, &params);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].lead_id, "L2");
    }

    #[test]
    fn test_priority_filter_excludes_countries_without_attributes() {
        let ds = dataset();
        let params = FilterParams {
            priority: "Tier 1".to_string(),
            ..Default::default()
        };
        let result = apply(&ds, &params);
        assert!(result.iter().all(|l| l.country == "Lebanon"));
        // L4's country has no attribute row, so it matches no concrete tier
        assert!(!result.iter().any(|l| l.lead_id == "L4"));
    }

    #[test]
    fn test_week_range_is_inclusive_on_both_bounds() {
        let ds = dataset();
        let params = FilterParams {
            week_min: Some(2),
            week_max: Some(4),
            ..Default::default()
        };
        let result = apply(&ds, &params);
        let ids: Vec<&str> = result.iter().map(|l| l.lead_id.as_str()).collect();
        assert_eq!(ids, vec!["L2", "L3", "L4", "L5"]);
    }

    #[test]
    fn test_combined_filters_apply_sequentially() {
        let ds = dataset();
        let params = FilterParams {
            channel: "Google Search".to_string(),
            country: "Lebanon".to_string(),
            week_min: Some(2),
            week_max: Some(4),
            ..Default::default()
        };
        let result = apply(&ds, &params);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].lead_id, "L5");
    }

    #[test]
    fn test_empty_result_is_valid() {
        let ds = dataset();
        let params = FilterParams {
            channel: "Google Search".to_string(),
            country: "Unknownia".to_string(),
            ..Default::default()
        };
        let result = apply(&ds, &params);
        assert!(result.is_empty());
    }

    #[test]
    fn test_validate_rejects_inverted_week_range() {
        let params = FilterParams {
            week_min: Some(10),
            week_max: Some(5),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = FilterParams {
            week_min: Some(5),
            week_max: Some(5),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_active_filters_descriptions() {
        let params = FilterParams {
            channel: "Google Search".to_string(),
            priority: "Tier 1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            params.active_filters(),
            vec!["Channel: Google Search", "Priority: Tier 1"]
        );
        assert!(FilterParams::default().active_filters().is_empty());
    }
}
