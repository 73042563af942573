//! AppMessage enum for async communication within the application.

use crate::error::FetchResult;
use crate::models::{Post, User};
use crate::state::PostDetailData;

/// Results of background loads, delivered to the main loop.
///
/// Each message carries the navigation generation it was issued under so
/// results for a view that has since been torn down can be dropped.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Posts and users for the dashboard
    DashboardLoaded {
        generation: u64,
        result: FetchResult<(Vec<Post>, Vec<User>)>,
    },
    /// A post and its author for the detail view
    PostDetailLoaded {
        generation: u64,
        result: FetchResult<Option<PostDetailData>>,
    },
}

impl AppMessage {
    pub fn generation(&self) -> u64 {
        match self {
            AppMessage::DashboardLoaded { generation, .. }
            | AppMessage::PostDetailLoaded { generation, .. } => *generation,
        }
    }
}
