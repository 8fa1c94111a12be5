//! CSV dataset loading and cleaning
//!
//! Any missing or malformed file fails the whole load; the caller reports
//! the required-file list and exits without serving.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use mip_common::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::records::{
    ChannelCost, CountryAttribute, Lead, PostPerformance, PostPerformanceRegional, WeeklyLead,
    WeeklyChannelSummary,
};
use super::Dataset;

/// The complete input file contract, relative to the data folder
pub const REQUIRED_FILES: [&str; 8] = [
    "channel_costs_GS.csv",
    "channel_costs_SM.csv",
    "country_attributes.csv",
    "master_leads.csv",
    "master_leads_weekly.csv",
    "post_performance_totals_clean.csv",
    "post_performance_regional_clean.csv",
    "weekly_channel_summary.csv",
];

/// Load, clean, and derive the full dataset from a data folder
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    let channel_gs: Vec<ChannelCost> = read_records(dir, "channel_costs_GS.csv")?;
    let channel_sm: Vec<ChannelCost> = read_records(dir, "channel_costs_SM.csv")?;
    let country_attributes: Vec<CountryAttribute> = read_records(dir, "country_attributes.csv")?;
    let leads: Vec<Lead> = read_records(dir, "master_leads.csv")?;
    let mut weekly_leads: Vec<WeeklyLead> = read_records(dir, "master_leads_weekly.csv")?;
    let post_totals: Vec<PostPerformance> =
        read_records(dir, "post_performance_totals_clean.csv")?;
    let post_regional: Vec<PostPerformanceRegional> =
        read_records(dir, "post_performance_regional_clean.csv")?;
    let weekly_channel_summary: Vec<WeeklyChannelSummary> =
        read_records(dir, "weekly_channel_summary.csv")?;

    // The Google Search export carries trailing summary rows with a blank
    // channel cell; drop them before combining with the Social Media rows.
    let mut channel_costs: Vec<ChannelCost> = channel_gs
        .into_iter()
        .filter(|row| row.channel.as_deref().is_some_and(|c| !c.trim().is_empty()))
        .collect();
    channel_costs.extend(channel_sm);

    // Parse the "Week N" labels and join country attributes onto each
    // weekly lead. A label with no digits means a malformed export.
    let attrs_by_country: HashMap<&str, &CountryAttribute> = country_attributes
        .iter()
        .map(|attr| (attr.country.as_str(), attr))
        .collect();

    for lead in &mut weekly_leads {
        lead.week_num = parse_week_number(&lead.week_number).ok_or_else(|| {
            Error::data_load(
                "master_leads_weekly.csv",
                format!(
                    "lead {}: week label {:?} has no week number",
                    lead.lead_id, lead.week_number
                ),
            )
        })?;
        if let Some(attr) = attrs_by_country.get(lead.country.as_str()) {
            lead.market_priority = Some(attr.market_priority.clone());
            lead.region = attr.region.clone();
        }
    }

    let week_min = weekly_leads.iter().map(|l| l.week_num).min().unwrap_or(0);
    let week_max = weekly_leads.iter().map(|l| l.week_num).max().unwrap_or(0);

    let channels = sorted_distinct(weekly_leads.iter().map(|l| l.channel.as_str()));
    let countries = sorted_distinct(country_attributes.iter().map(|a| a.country.as_str()));
    let priorities = sorted_distinct(
        country_attributes
            .iter()
            .map(|a| a.market_priority.as_str()),
    );

    info!(
        "Dataset loaded: {} weekly leads, {} transaction leads, {} cost rows, weeks {}-{}",
        weekly_leads.len(),
        leads.len(),
        channel_costs.len(),
        week_min,
        week_max
    );

    Ok(Dataset {
        weekly_leads,
        leads,
        channel_costs,
        country_attributes,
        post_totals,
        post_regional,
        weekly_channel_summary,
        week_min,
        week_max,
        channels,
        countries,
        priorities,
    })
}

/// Read one CSV file into typed records
fn read_records<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(&path)
        .map_err(|e| Error::data_load(file, e))?;

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let record: T =
            result.map_err(|e| Error::data_load(file, format!("row {}: {}", index + 1, e)))?;
        rows.push(record);
    }

    debug!("Read {} rows from {}", rows.len(), file);
    Ok(rows)
}

/// Extract the numeric part of a week label like "Week 12"
fn parse_week_number(label: &str) -> Option<u32> {
    let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Sorted distinct non-empty values of one dimension
fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
