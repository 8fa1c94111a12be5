//! Shared test fixtures: a small but complete set of the eight input CSVs

use std::fs;
use std::path::Path;

pub const COUNTRY_ATTRIBUTES: &str = "\
country,market_priority,region
Lebanon,Tier 1,Middle East
Jordan,Tier 2,Middle East
Egypt,Tier 2,North Africa
";

/// 10 weekly leads over weeks 1-5: 3 qualified, 8 reachable
pub const MASTER_LEADS_WEEKLY: &str = "\
lead_id,channel,country,week_number,is_qualified,is_reachable
L001,Google Search,Lebanon,Week 1,1,1
L002,Social Media,Lebanon,Week 1,0,1
L003,Google Search,Jordan,Week 2,0,1
L004,Social Media,Jordan,Week 2,0,0
L005,Google Search,Lebanon,Week 3,1,1
L006,Social Media,Egypt,Week 3,0,1
L007,Google Search,Lebanon,Week 4,0,1
L008,Social Media,Jordan,Week 4,1,0
L009,Google Search,Egypt,Week 5,0,1
L010,Social Media,Lebanon,Week 5,0,1
";

pub const MASTER_LEADS: &str = "\
lead_id,channel,country
T001,Google Search,Lebanon
T002,Social Media,Jordan
T003,Google Search,Egypt
";

/// Carries the Google Search export artifacts: a `#DIV/0!` CPL cell and a
/// trailing summary row with a blank channel (must be dropped by the loader)
pub const CHANNEL_COSTS_GS: &str = "\
channel,budget_usd,leads,cpl
Google_Search,600,4,150.0
Google_Search,400,0,#DIV/0!
,9999,,
";

pub const CHANNEL_COSTS_SM: &str = "\
channel,budget_usd,leads,cpl
Social_Media,300,3,100.0
Social_Media,200,2,100.0
";

pub const POST_PERFORMANCE_TOTALS: &str = "\
post_id,ad_spend_usd,leads,qualified_leads
Post1,1000,20,4
Post2,2000,30,2
Post3,1000,10,2
";

pub const POST_PERFORMANCE_REGIONAL: &str = "\
post_id,region,leads
Post1,Middle East,15
Post1,North Africa,5
Post2,Middle East,30
";

pub const WEEKLY_CHANNEL_SUMMARY: &str = "\
week_number,channel,leads,budget_usd
Week 1,Google_Search,1,120
Week 1,Social_Media,1,60
Week 2,Google_Search,1,120
Week 2,Social_Media,1,60
";

/// Write all eight fixture files into `dir`
pub fn write_fixtures(dir: &Path) {
    let files = [
        ("channel_costs_GS.csv", CHANNEL_COSTS_GS),
        ("channel_costs_SM.csv", CHANNEL_COSTS_SM),
        ("country_attributes.csv", COUNTRY_ATTRIBUTES),
        ("master_leads.csv", MASTER_LEADS),
        ("master_leads_weekly.csv", MASTER_LEADS_WEEKLY),
        ("post_performance_totals_clean.csv", POST_PERFORMANCE_TOTALS),
        (
            "post_performance_regional_clean.csv",
            POST_PERFORMANCE_REGIONAL,
        ),
        ("weekly_channel_summary.csv", WEEKLY_CHANNEL_SUMMARY),
    ];
    for (name, content) in files {
        fs::write(dir.join(name), content).expect("Should write fixture file");
    }
}
