//! Chart aggregations over the loaded dataset.
//!
//! Both aggregations are pure functions of their inputs, computed once when
//! a dashboard load completes:
//!
//! - [`posts_per_user`] - post counts per user, highest first
//! - [`title_length_distribution`] - post titles bucketed by length in tens

pub mod posts_per_user;
pub mod title_length;

pub use posts_per_user::{posts_per_user, PostCountEntry};
pub use title_length::{title_length_distribution, TitleBucketEntry, PIE_COLORS};
