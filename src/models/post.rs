use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;

/// A post from the `/posts` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post id (>= 1)
    pub id: u64,
    /// Id of the authoring user, if the post carries one
    #[serde(default)]
    pub user_id: Option<u64>,
    /// Post title
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    /// Post body, may contain newlines
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub body: String,
}

impl Post {
    /// The author id to look up, if any.
    ///
    /// User ids start at 1, so a zero id counts as "no author".
    pub fn author_id(&self) -> Option<u64> {
        self.user_id.filter(|id| *id != 0)
    }

    /// Navigational path of this post's detail view.
    pub fn detail_path(&self) -> String {
        format!("/posts/{}", self.id)
    }

    /// Title length in characters.
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }
}
