//! Aggregation over the filtered lead set
//!
//! Pure functions, no state: every request recomputes its page's numbers
//! from the filtered records. All divisions are zero-guarded.

pub mod channels;
pub mod creative;
pub mod geo;
pub mod kpi;
pub mod temporal;

pub use channels::{channel_mix, channel_qualification, efficiency_comparison};
pub use creative::post_roi_ranking;
pub use geo::top_countries;
pub use kpi::kpi_summary;
pub use temporal::weekly_series;

/// Round to a fixed number of decimal places (chart label precision)
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Percentage of part in whole, zero-guarded
pub(crate) fn pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
