//! View state machines
//!
//! Each mounted view owns exactly one [`FetchState`] and is its only writer:
//! - [`DashboardState`]: parallel fetch of posts and users, chart aggregates
//! - [`PostDetailState`]: sequential fetch of a post, then its author
//!
//! The async loaders ([`load_dashboard`], [`load_post_detail`]) only talk to
//! the API; their results are handed back to the owning state's `apply`.

pub mod dashboard;
mod fetch_state;
pub mod post_detail;

pub use dashboard::{load_dashboard, DashboardData, DashboardState, PostCard, UNKNOWN_USER};
pub use fetch_state::FetchState;
pub use post_detail::{load_post_detail, PostDetailData, PostDetailState, NO_POST_ID_MESSAGE};
