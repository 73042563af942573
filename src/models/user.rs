use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;

/// A user from the `/users` endpoints.
///
/// The API also returns address, phone and company; those are not used and
/// are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id (>= 1)
    pub id: u64,
    /// Display name, e.g. "Leanne Graham"
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    /// Handle, e.g. "Bret"
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,
    /// Bare host name without scheme, e.g. "hildegard.org"
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub website: String,
}

impl User {
    /// Browsable URL for the user's website.
    pub fn website_url(&self) -> String {
        format!("http://{}", self.website)
    }
}
