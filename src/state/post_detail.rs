//! Post detail state management
//!
//! `Idle -> Loading -> {Loaded | Failed | NotFound}`. The post is fetched
//! first; its author is fetched only after the post arrives with a user id.

use tracing::{debug, info};

use super::FetchState;
use crate::api::PlaceholderApi;
use crate::error::FetchResult;
use crate::models::{Post, User};

/// Failure shown when the route carries no post id.
pub const NO_POST_ID_MESSAGE: &str = "No post ID provided in URL.";

/// A loaded post and, when it has one, its author.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetailData {
    pub post: Post,
    pub author: Option<User>,
}

/// State machine for the post detail view.
#[derive(Debug, Clone, Default)]
pub struct PostDetailState {
    /// Id from the route, as given
    post_id: String,
    state: FetchState<PostDetailData>,
}

impl PostDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<PostDetailData> {
        &self.state
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    /// Mount the view for `post_id`, discarding any prior state.
    ///
    /// Returns `true` when a load must be issued. An empty id fails
    /// immediately and returns `false`.
    pub fn begin(&mut self, post_id: &str) -> bool {
        self.post_id = post_id.trim().to_string();

        if self.post_id.is_empty() {
            debug!("PostDetail: no post id, failing without fetch");
            self.state = FetchState::Failed(NO_POST_ID_MESSAGE.to_string());
            return false;
        }

        debug!(post_id = %self.post_id, "PostDetail: begin load");
        self.state = FetchState::Loading;
        true
    }

    /// Apply the outcome of [`load_post_detail`].
    ///
    /// Returns `false` (and changes nothing) when the view is not loading.
    pub fn apply(&mut self, result: FetchResult<Option<PostDetailData>>) -> bool {
        if !self.state.is_loading() {
            debug!(state = self.state.label(), "PostDetail: ignoring result outside Loading");
            return false;
        }

        self.state = match result {
            Ok(Some(data)) => {
                info!(
                    post_id = data.post.id,
                    has_author = data.author.is_some(),
                    "Post details loaded"
                );
                FetchState::Loaded(data)
            }
            Ok(None) => FetchState::NotFound,
            Err(e) => FetchState::Failed(format!(
                "Failed to load post details for ID {}. {}",
                self.post_id, e
            )),
        };
        true
    }
}

/// Fetch a post, then its author.
///
/// - post fetch fails: error
/// - post body is `null`: `Ok(None)`
/// - post has no user id: loaded without author, no second fetch
/// - author fetch fails: error, the fetched post is discarded
pub async fn load_post_detail(
    api: &PlaceholderApi,
    post_id: &str,
) -> FetchResult<Option<PostDetailData>> {
    let Some(post) = api.post(post_id).await? else {
        return Ok(None);
    };

    let author = match post.author_id() {
        Some(user_id) => Some(api.user(user_id).await?),
        None => None,
    };

    Ok(Some(PostDetailData { post, author }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    fn post(id: u64, user_id: Option<u64>) -> Post {
        Post {
            id,
            user_id,
            title: "sunt aut facere".to_string(),
            body: "quia et suscipit".to_string(),
        }
    }

    #[test]
    fn test_empty_id_fails_immediately() {
        let mut state = PostDetailState::new();
        assert!(!state.begin(""));
        assert_eq!(state.state().error(), Some(NO_POST_ID_MESSAGE));

        assert!(!state.begin("   "));
        assert_eq!(state.state().error(), Some(NO_POST_ID_MESSAGE));
    }

    #[test]
    fn test_begin_with_id_enters_loading() {
        let mut state = PostDetailState::new();
        assert!(state.begin("5"));
        assert!(state.state().is_loading());
        assert_eq!(state.post_id(), "5");
    }

    #[test]
    fn test_apply_loaded_without_author() {
        let mut state = PostDetailState::new();
        state.begin("1");
        state.apply(Ok(Some(PostDetailData {
            post: post(1, None),
            author: None,
        })));

        let data = state.state().loaded().unwrap();
        assert_eq!(data.post.id, 1);
        assert!(data.author.is_none());
    }

    #[test]
    fn test_apply_none_is_not_found() {
        let mut state = PostDetailState::new();
        state.begin("1");
        state.apply(Ok(None));
        assert_eq!(state.state(), &FetchState::NotFound);
    }

    #[test]
    fn test_apply_error_includes_id() {
        let mut state = PostDetailState::new();
        state.begin("12");
        state.apply(Err(FetchError::http_status(404)));

        assert_eq!(
            state.state().error(),
            Some("Failed to load post details for ID 12. HTTP error! status: 404")
        );
    }

    #[test]
    fn test_reentry_discards_prior_state() {
        let mut state = PostDetailState::new();
        state.begin("1");
        state.apply(Ok(Some(PostDetailData {
            post: post(1, None),
            author: None,
        })));

        assert!(state.begin("2"));
        assert!(state.state().is_loading());
        assert_eq!(state.post_id(), "2");
    }

    #[test]
    fn test_apply_outside_loading_is_ignored() {
        let mut state = PostDetailState::new();
        state.begin("");
        assert!(!state.apply(Ok(None)));
        assert_eq!(state.state().error(), Some(NO_POST_ID_MESSAGE));
    }
}
