//! Dashboard state management
//!
//! Holds the dashboard's [`FetchState`], the aggregates derived when data
//! arrives, and the post grid selection.

use tracing::{debug, info};

use super::FetchState;
use crate::aggregate::{posts_per_user, title_length_distribution, PostCountEntry, TitleBucketEntry};
use crate::api::PlaceholderApi;
use crate::error::FetchResult;
use crate::models::{Post, User};

/// Author label for posts whose user is not in the loaded set.
pub const UNKNOWN_USER: &str = "Unknown User";

const ERROR_PREFIX: &str = "Failed to load dashboard data. ";

// ============================================================================
// DashboardData
// ============================================================================

/// Everything the loaded dashboard renders.
///
/// The chart aggregates are computed once, when the data arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub posts: Vec<Post>,
    pub users: Vec<User>,
    pub posts_per_user: Vec<PostCountEntry>,
    pub title_lengths: Vec<TitleBucketEntry>,
}

/// Pre-computed data for one post card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard<'a> {
    pub post_id: u64,
    pub title: &'a str,
    pub author: &'a str,
    pub body: &'a str,
    pub path: String,
}

impl DashboardData {
    pub fn new(posts: Vec<Post>, users: Vec<User>) -> Self {
        let posts_per_user = posts_per_user(&users, &posts);
        let title_lengths = title_length_distribution(&posts);
        Self {
            posts,
            users,
            posts_per_user,
            title_lengths,
        }
    }

    /// Display name of a post's author, or [`UNKNOWN_USER`] for orphaned posts.
    pub fn author_name(&self, post: &Post) -> &str {
        post.user_id
            .and_then(|id| self.users.iter().find(|user| user.id == id))
            .map(|user| user.name.as_str())
            .unwrap_or(UNKNOWN_USER)
    }

    /// Cards for the post grid, in post order.
    pub fn cards(&self) -> Vec<PostCard<'_>> {
        self.posts
            .iter()
            .map(|post| PostCard {
                post_id: post.id,
                title: &post.title,
                author: self.author_name(post),
                body: &post.body,
                path: post.detail_path(),
            })
            .collect()
    }

    pub fn total_posts(&self) -> u32 {
        self.posts.len() as u32
    }
}

// ============================================================================
// DashboardState
// ============================================================================

/// State machine for the dashboard view.
///
/// `Idle -> Loading -> {Loaded | Failed}`. Terminal states only change when
/// the view is mounted again via [`DashboardState::begin`].
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    state: FetchState<DashboardData>,
    /// Index of the selected post card
    selected: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<DashboardData> {
        &self.state
    }

    /// Loaded data, if the dashboard is in `Loaded`.
    pub fn data(&self) -> Option<&DashboardData> {
        self.state.loaded()
    }

    /// Mount the view: discard prior data and enter `Loading`.
    pub fn begin(&mut self) {
        debug!(from = self.state.label(), "Dashboard: begin load");
        self.state = FetchState::Loading;
        self.selected = 0;
    }

    /// Apply the outcome of [`load_dashboard`].
    ///
    /// Returns `false` (and changes nothing) when the view is not loading.
    pub fn apply(&mut self, result: FetchResult<(Vec<Post>, Vec<User>)>) -> bool {
        if !self.state.is_loading() {
            debug!(state = self.state.label(), "Dashboard: ignoring result outside Loading");
            return false;
        }

        self.state = match result {
            Ok((posts, users)) => {
                info!(posts = posts.len(), users = users.len(), "Dashboard data loaded");
                FetchState::Loaded(DashboardData::new(posts, users))
            }
            Err(e) => FetchState::Failed(format!("{}{}", ERROR_PREFIX, e)),
        };
        true
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Number of selectable cards.
    pub fn card_count(&self) -> usize {
        self.data().map(|data| data.posts.len()).unwrap_or(0)
    }

    /// Move the selection by `delta` cards, clamped to the grid.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.card_count();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let max = (count - 1) as isize;
        self.selected = (self.selected as isize + delta).clamp(0, max) as usize;
    }

    /// The currently selected post, if loaded.
    pub fn selected_post(&self) -> Option<&Post> {
        self.data().and_then(|data| data.posts.get(self.selected))
    }
}

/// Fetch posts and users concurrently.
///
/// Both requests are issued without waiting on each other. The first
/// failure wins; the other result is discarded.
pub async fn load_dashboard(api: &PlaceholderApi) -> FetchResult<(Vec<Post>, Vec<User>)> {
    futures::try_join!(api.posts(), api.users())
}
