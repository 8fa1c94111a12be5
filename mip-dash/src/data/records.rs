//! Typed row records for the eight input CSV files
//!
//! The exports these files come from carry spreadsheet artifacts (blank key
//! cells, `#DIV/0!` formula errors), so the numeric columns that can contain
//! them deserialize leniently instead of failing the whole file.

use serde::{Deserialize, Deserializer, Serialize};

/// One lead at weekly grain (`master_leads_weekly.csv`), enriched at load
/// time with its country's attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyLead {
    pub lead_id: String,
    pub channel: String,
    pub country: String,
    /// Week label as exported, e.g. "Week 12"
    pub week_number: String,
    #[serde(deserialize_with = "bool_from_int")]
    pub is_qualified: bool,
    #[serde(deserialize_with = "bool_from_int")]
    pub is_reachable: bool,

    /// Numeric week extracted from `week_number` (set by the loader)
    #[serde(skip)]
    pub week_num: u32,
    /// Market priority tier joined from country attributes (set by the loader)
    #[serde(skip)]
    pub market_priority: Option<String>,
    /// Region joined from country attributes (set by the loader)
    #[serde(skip)]
    pub region: Option<String>,
}

/// One lead at transaction grain (`master_leads.csv`)
///
/// Loaded as part of the dataset contract but not rendered by any page;
/// only its row count is reported.
#[derive(Debug, Clone, Deserialize)]
pub struct Lead {
    pub lead_id: String,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// One channel cost row (`channel_costs_GS.csv` / `channel_costs_SM.csv`)
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelCost {
    /// Blank in trailing summary rows of the Google Search export
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub budget_usd: Option<f64>,
    #[serde(default)]
    pub leads: Option<f64>,
    /// Cost per lead; `#DIV/0!` cells parse as missing
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cpl: Option<f64>,
}

/// One country attribute row (`country_attributes.csv`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountryAttribute {
    pub country: String,
    pub market_priority: String,
    #[serde(default)]
    pub region: Option<String>,
}

/// Per-post totals (`post_performance_totals_clean.csv`)
#[derive(Debug, Clone, Deserialize)]
pub struct PostPerformance {
    pub post_id: String,
    #[serde(default)]
    pub ad_spend_usd: Option<f64>,
    #[serde(default)]
    pub leads: Option<f64>,
    #[serde(default)]
    pub qualified_leads: Option<f64>,
}

/// Per-post per-region breakdown (`post_performance_regional_clean.csv`)
#[derive(Debug, Clone, Deserialize)]
pub struct PostPerformanceRegional {
    pub post_id: String,
    pub region: String,
    #[serde(default)]
    pub leads: Option<f64>,
}

/// Per-week per-channel summary (`weekly_channel_summary.csv`)
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyChannelSummary {
    pub week_number: String,
    pub channel: String,
    #[serde(default)]
    pub leads: Option<f64>,
    #[serde(default)]
    pub budget_usd: Option<f64>,
}

/// Deserialize a 0/1 integer column as bool
fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u8::deserialize(deserializer)?;
    Ok(value != 0)
}

/// Deserialize a numeric column that may contain non-numeric cells
/// (spreadsheet formula errors like `#DIV/0!`) as None instead of failing
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<f64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_lead_bool_columns() {
        let csv = "lead_id,channel,country,week_number,is_qualified,is_reachable\n\
                   L001,Google Search,Lebanon,Week 3,1,0\n";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let lead: WeeklyLead = reader.deserialize().next().unwrap().unwrap();
        assert!(lead.is_qualified);
        assert!(!lead.is_reachable);
        assert_eq!(lead.week_number, "Week 3");
    }

    #[test]
    fn test_channel_cost_div0_cpl_parses_as_none() {
        let csv = "channel,budget_usd,leads,cpl\n\
                   Google_Search,1000,25,40.0\n\
                   Google_Search,500,0,#DIV/0!\n\
                   ,,,\n";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<ChannelCost> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows[0].cpl, Some(40.0));
        assert_eq!(rows[1].cpl, None);
        assert_eq!(rows[2].channel, None);
        assert_eq!(rows[2].budget_usd, None);
    }
}
