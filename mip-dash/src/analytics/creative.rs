//! Post (creative) ROI ranking

use serde::Serialize;

use super::round_to;
use crate::data::PostPerformance;

/// One post in the ROI ranking
#[derive(Debug, Clone, Serialize)]
pub struct PostRoi {
    pub post_id: String,
    /// Qualified leads per $1000 of ad spend
    pub roi_score: f64,
    pub above_median: bool,
}

/// ROI score per post, ascending (chart renders bottom-up)
///
/// Posts without spend figures (or zero spend) are excluded rather than
/// scored. The median is taken over the included scores.
pub fn post_roi_ranking(posts: &[PostPerformance]) -> Vec<PostRoi> {
    let mut ranking: Vec<PostRoi> = posts
        .iter()
        .filter_map(|post| {
            let spend = post.ad_spend_usd.filter(|s| *s > 0.0)?;
            let qualified = post.qualified_leads?;
            Some(PostRoi {
                post_id: post.post_id.clone(),
                roi_score: round_to(qualified / spend * 1000.0, 3),
                above_median: false,
            })
        })
        .collect();

    ranking.sort_by(|a, b| {
        a.roi_score
            .partial_cmp(&b.roi_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.post_id.cmp(&b.post_id))
    });

    let median = median_of(&ranking);
    for post in &mut ranking {
        post.above_median = post.roi_score > median;
    }

    ranking
}

fn median_of(ranking: &[PostRoi]) -> f64 {
    if ranking.is_empty() {
        return 0.0;
    }
    // Ranking is already sorted by score
    let mid = ranking.len() / 2;
    if ranking.len() % 2 == 1 {
        ranking[mid].roi_score
    } else {
        (ranking[mid - 1].roi_score + ranking[mid].roi_score) / 2.0
    }
}
