//! Common test utilities for integration tests.
//!
//! Fixtures mirror the shape of the JSONPlaceholder payloads, and
//! [`TestApi`] wires a [`MockHttpClient`] into a [`PlaceholderApi`] rooted
//! at [`BASE_URL`].
//!
//! ```ignore
//! let api = TestApi::new().with_dashboard_data();
//! let mut app = App::new(api.api());
//! app.navigate("/");
//! pump(&mut app, &mut rx).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

use postdash::adapters::{MockHttpClient, MockResponse};
use postdash::api::PlaceholderApi;
use postdash::app::{App, AppMessage};
use postdash::ui;

pub const BASE_URL: &str = "http://api.test";

// ============================================================================
// Fixtures
// ============================================================================

pub fn user_json(id: u64, name: &str, username: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "username": username,
        "email": format!("{}@example.com", username.to_lowercase()),
        "address": { "city": "Gwenborough" },
        "phone": "1-770-736-8031",
        "website": format!("{}.org", username.to_lowercase()),
        "company": { "name": "Romaguera-Crona" }
    })
}

pub fn post_json(id: u64, user_id: Value, title: &str) -> Value {
    json!({
        "userId": user_id,
        "id": id,
        "title": title,
        "body": format!("body of post {}\nsecond line", id)
    })
}

/// Three users; Clementine has no posts.
pub fn sample_users() -> Value {
    json!([
        user_json(1, "Leanne Graham", "Bret"),
        user_json(2, "Ervin Howell", "Antonette"),
        user_json(3, "Clementine Bauch", "Samantha"),
    ])
}

/// Four posts: three by Leanne, one by Ervin. Title lengths 9, 12, 15, 25.
pub fn sample_posts() -> Value {
    json!([
        post_json(1, json!(1), "sunt aut "),
        post_json(2, json!(1), "qui est esse"),
        post_json(3, json!(2), "ea molestias qu"),
        post_json(4, json!(1), "eum et est occaecati xxxx"),
    ])
}

// ============================================================================
// Mock API
// ============================================================================

/// Builder around a shared [`MockHttpClient`].
#[derive(Clone, Default)]
pub struct TestApi {
    pub http: MockHttpClient,
}

impl TestApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    pub fn respond(self, path: &str, response: MockResponse) -> Self {
        self.http.set_response(&Self::url(path), response);
        self
    }

    pub fn respond_json(self, path: &str, body: Value) -> Self {
        self.respond(path, MockResponse::json(body))
    }

    /// `/posts` and `/users` with the sample fixtures.
    pub fn with_dashboard_data(self) -> Self {
        self.respond_json("/posts", sample_posts())
            .respond_json("/users", sample_users())
    }

    pub fn api(&self) -> PlaceholderApi {
        PlaceholderApi::with_base_url(BASE_URL, Arc::new(self.http.clone()))
    }

    pub fn request_count(&self) -> usize {
        self.http.request_count()
    }

    pub fn was_requested(&self, path: &str) -> bool {
        self.http.was_requested(&Self::url(path))
    }
}

// ============================================================================
// App helpers
// ============================================================================

/// App wired to `api`, with its message receiver handed to the test.
pub fn test_app(api: &TestApi) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(api.api());
    let rx = app
        .message_rx
        .take()
        .expect("fresh app has a message receiver");
    (app, rx)
}

/// Receive one load result and apply it. Returns whether it was applied.
///
/// Panics if nothing arrives within a second.
pub async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) -> bool {
    let message = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for a load result")
        .expect("message channel closed");
    app.handle_message(message)
}

/// Render the app into a test terminal and return its text, row by row.
pub fn render_text(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
