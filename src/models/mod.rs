//! Data models for the JSONPlaceholder dataset.
//!
//! - [`Post`] - a post as returned by `/posts` and `/posts/{id}`
//! - [`User`] - a user as returned by `/users` and `/users/{id}`

mod post;
mod user;

pub use post::Post;
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Deserialize a string that may be `null` or missing as an empty string.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
