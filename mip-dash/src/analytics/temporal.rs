//! Weekly lead-volume series with a trailing moving average

use serde::Serialize;
use std::collections::BTreeMap;

use super::{pct, round_to};
use crate::data::WeeklyLead;

/// Trailing window width for the moving average, in weeks
const MA_WINDOW: usize = 4;

/// One point of the weekly trend chart
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPoint {
    pub week: u32,
    pub leads: usize,
    pub qualified: usize,
    pub qualification_rate_pct: f64,
    /// 4-week trailing moving average of lead volume; absent until the
    /// window is full
    pub moving_avg: Option<f64>,
}

/// Lead volume per week, ascending by week number
///
/// Only weeks present in the filtered set appear; the moving average runs
/// over the points in order, matching a rolling window over the series.
pub fn weekly_series(leads: &[&WeeklyLead]) -> Vec<WeeklyPoint> {
    let mut by_week: BTreeMap<u32, (usize, usize)> = BTreeMap::new();
    for lead in leads {
        let entry = by_week.entry(lead.week_num).or_default();
        entry.0 += 1;
        if lead.is_qualified {
            entry.1 += 1;
        }
    }

    let mut points: Vec<WeeklyPoint> = by_week
        .into_iter()
        .map(|(week, (total, qualified))| WeeklyPoint {
            week,
            leads: total,
            qualified,
            qualification_rate_pct: round_to(pct(qualified as f64, total as f64), 2),
            moving_avg: None,
        })
        .collect();

    for i in (MA_WINDOW - 1)..points.len() {
        let window_sum: usize = points[i + 1 - MA_WINDOW..=i].iter().map(|p| p.leads).sum();
        points[i].moving_avg = Some(round_to(window_sum as f64 / MA_WINDOW as f64, 2));
    }

    points
}
