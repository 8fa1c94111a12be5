//! In-memory dataset loaded once at startup
//!
//! The dashboard has no database; the eight CSV exports are read at process
//! start and held immutably for the process lifetime. Every request
//! recomputes its view from these tables.

pub mod loader;
pub mod records;

pub use loader::{load_dataset, REQUIRED_FILES};
pub use records::{
    ChannelCost, CountryAttribute, Lead, PostPerformance, PostPerformanceRegional, WeeklyLead,
    WeeklyChannelSummary,
};

/// All tables plus values derived once at load time
#[derive(Debug)]
pub struct Dataset {
    /// Weekly-grain leads, enriched with country attributes
    pub weekly_leads: Vec<WeeklyLead>,
    /// Transaction-grain leads (counted, never rendered)
    pub leads: Vec<Lead>,
    /// Combined Google Search + Social Media cost rows, cleaned
    pub channel_costs: Vec<ChannelCost>,
    pub country_attributes: Vec<CountryAttribute>,
    pub post_totals: Vec<PostPerformance>,
    pub post_regional: Vec<PostPerformanceRegional>,
    pub weekly_channel_summary: Vec<WeeklyChannelSummary>,

    /// Lowest week number present in the weekly leads
    pub week_min: u32,
    /// Highest week number present in the weekly leads
    pub week_max: u32,
    /// Sorted distinct channels (filter options)
    pub channels: Vec<String>,
    /// Sorted distinct countries (filter options)
    pub countries: Vec<String>,
    /// Sorted distinct market priority tiers (filter options)
    pub priorities: Vec<String>,
}
