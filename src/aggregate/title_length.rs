//! Title-length distribution for the pie chart.

use std::collections::BTreeMap;

use crate::models::Post;

/// Slice colors, assigned by position in the sorted distribution.
pub const PIE_COLORS: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A28DFF", "#FF6B6B", "#6A0572", "#2C3E50",
];

const BUCKET_WIDTH: usize = 10;

/// One slice of the "Post Title Length Distribution" chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBucketEntry {
    /// `"{start}-{start+9}"`
    pub range_label: String,
    /// Posts in this bucket, always >= 1
    pub count: u32,
    /// Bucket start, the sort key
    pub sort_key: usize,
    /// Position in the sorted output modulo the palette size
    pub color_index: usize,
}

impl TitleBucketEntry {
    /// Hex color of this slice.
    pub fn color(&self) -> &'static str {
        PIE_COLORS[self.color_index % PIE_COLORS.len()]
    }

    /// Share of `total` posts in this bucket, rounded to a whole percent.
    pub fn percent_of(&self, total: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        ((self.count as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Bucket post titles by length in tens (0-9, 10-19, ...).
///
/// Only populated buckets are emitted, ascending by bucket start. Colors
/// cycle through [`PIE_COLORS`] by output position.
pub fn title_length_distribution(posts: &[Post]) -> Vec<TitleBucketEntry> {
    let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
    for post in posts {
        let start = (post.title_len() / BUCKET_WIDTH) * BUCKET_WIDTH;
        *counts.entry(start).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(index, (start, count))| TitleBucketEntry {
            range_label: format!("{}-{}", start, start + BUCKET_WIDTH - 1),
            count,
            sort_key: start,
            color_index: index % PIE_COLORS.len(),
        })
        .collect()
}
