//! Posts-per-user aggregation for the bar chart.

use std::collections::HashMap;

use crate::models::{Post, User};

/// One bar of the "Posts per User" chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCountEntry {
    pub user_name: String,
    pub post_count: u32,
}

/// Count posts per user.
///
/// Output is driven by `users`: one entry per user, zero when the user has
/// no posts. Posts whose author is not in `users` are counted but never
/// emitted. Entries are sorted by count, highest first; ties keep the order
/// of `users`.
pub fn posts_per_user(users: &[User], posts: &[Post]) -> Vec<PostCountEntry> {
    let mut counts: HashMap<u64, u32> = HashMap::with_capacity(users.len());
    for user_id in posts.iter().filter_map(|post| post.user_id) {
        *counts.entry(user_id).or_insert(0) += 1;
    }

    let mut entries: Vec<PostCountEntry> = users
        .iter()
        .map(|user| PostCountEntry {
            user_name: user.name.clone(),
            post_count: counts.get(&user.id).copied().unwrap_or(0),
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| b.post_count.cmp(&a.post_count));
    entries
}
