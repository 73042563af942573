//! JSONPlaceholder API client.
//!
//! Wraps an injected [`HttpClient`] and exposes the generic JSON fetch plus
//! the four read endpoints the dashboard consumes:
//!
//! - `GET {base}/posts`
//! - `GET {base}/posts/{id}`
//! - `GET {base}/users`
//! - `GET {base}/users/{id}`

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::{FetchError, FetchResult};
use crate::models::{Post, User};
use crate::traits::{Headers, HttpClient};

pub const API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Client for the JSONPlaceholder posts/users API.
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct PlaceholderApi {
    /// Base URL without trailing slash
    base_url: String,
    /// Injected transport
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PlaceholderApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PlaceholderApi {
    /// Create a client against the public JSONPlaceholder instance.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(API_BASE_URL, http)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// URL of a single post. The id is percent-encoded as a path segment.
    pub fn post_url(&self, post_id: &str) -> String {
        format!("{}/posts/{}", self.base_url, urlencoding::encode(post_id))
    }

    pub fn user_url(&self, user_id: u64) -> String {
        format!("{}/users/{}", self.base_url, user_id)
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// Transport errors, non-2xx statuses and undecodable bodies all come
    /// back as a [`FetchError`]. Nothing is retried or cached.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let result = self.get_json(url).await;
        if let Err(ref e) = result {
            tracing::error!(url, error = %e, "Error fetching data");
        }
        result
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.http.get(url, &headers).await?;
        if !response.is_success() {
            return Err(FetchError::http_status(response.status));
        }

        response.json().map_err(|e| FetchError::invalid_json(&e))
    }

    /// All posts.
    pub async fn posts(&self) -> FetchResult<Vec<Post>> {
        self.fetch_json(&self.posts_url()).await
    }

    /// All users.
    pub async fn users(&self) -> FetchResult<Vec<User>> {
        self.fetch_json(&self.users_url()).await
    }

    /// A single post. A JSON `null` body yields `Ok(None)`.
    pub async fn post(&self, post_id: &str) -> FetchResult<Option<Post>> {
        self.fetch_json(&self.post_url(post_id)).await
    }

    /// A single user.
    pub async fn user(&self, user_id: u64) -> FetchResult<User> {
        self.fetch_json(&self.user_url(user_id)).await
    }
}
