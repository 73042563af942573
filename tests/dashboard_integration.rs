//! Dashboard load, aggregation and navigation flows against a mock API.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use postdash::adapters::MockResponse;
use postdash::app::Route;
use postdash::state::FetchState;
use postdash::traits::HttpError;
use serde_json::json;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn test_dashboard_loads_and_aggregates() {
    let api = TestApi::new().with_dashboard_data();
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    assert!(app.dashboard.state().is_loading());
    assert!(pump(&mut app, &mut rx).await);

    let data = app.dashboard.data().expect("dashboard loaded");
    assert_eq!(data.posts.len(), 4);
    assert_eq!(data.users.len(), 3);

    let counts: Vec<(&str, u32)> = data
        .posts_per_user
        .iter()
        .map(|e| (e.user_name.as_str(), e.post_count))
        .collect();
    assert_eq!(
        counts,
        vec![("Leanne Graham", 3), ("Ervin Howell", 1), ("Clementine Bauch", 0)]
    );

    let buckets: Vec<(&str, u32, usize)> = data
        .title_lengths
        .iter()
        .map(|e| (e.range_label.as_str(), e.count, e.color_index))
        .collect();
    assert_eq!(buckets, vec![("0-9", 1, 0), ("10-19", 2, 1), ("20-29", 1, 2)]);

    assert!(api.was_requested("/posts"));
    assert!(api.was_requested("/users"));
    assert_eq!(api.request_count(), 2);
}

#[tokio::test]
async fn test_dashboard_renders_loaded_view() {
    let api = TestApi::new().with_dashboard_data();
    let (mut app, mut rx) = test_app(&api);
    app.navigate("/");

    let loading = render_text(&mut app, 120, 50);
    assert!(loading.contains("Loading dashboard..."));

    pump(&mut app, &mut rx).await;
    let text = render_text(&mut app, 120, 50);
    assert!(text.contains("My Dashboard"));
    assert!(text.contains("Dashboard Overview"));
    assert!(text.contains("Leanne Graham"));
    assert!(text.contains("10-19"));
    assert!(text.contains("All Posts"));
    assert!(text.contains("qui est esse"));
    assert!(text.contains("By: Ervin Howell"));
}

#[tokio::test]
async fn test_users_failure_discards_posts() {
    let api = TestApi::new()
        .respond_json("/posts", sample_posts())
        .respond("/users", MockResponse::status(500, "boom"));
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    pump(&mut app, &mut rx).await;

    assert!(app.dashboard.data().is_none());
    assert_eq!(
        app.dashboard.state().error(),
        Some("Failed to load dashboard data. HTTP error! status: 500")
    );
    assert!(render_text(&mut app, 120, 30).contains("Error: Failed to load dashboard data."));
}

#[tokio::test]
async fn test_first_failure_wins_without_waiting_for_other_fetch() {
    // Posts never complete; the users failure alone settles the view
    let api = TestApi::new()
        .respond("/posts", MockResponse::Pending)
        .respond(
            "/users",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    pump(&mut app, &mut rx).await;

    let error = app.dashboard.state().error().expect("dashboard failed");
    assert!(error.starts_with("Failed to load dashboard data. "));
    assert!(error.contains("refused"));
}

#[tokio::test]
async fn test_invalid_json_fails_dashboard() {
    let api = TestApi::new()
        .respond("/posts", MockResponse::status(200, "<html>"))
        .respond_json("/users", sample_users());
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    pump(&mut app, &mut rx).await;

    let error = app.dashboard.state().error().expect("dashboard failed");
    assert!(error.contains("Invalid JSON response"));
}

#[tokio::test]
async fn test_empty_dataset_loads() {
    let api = TestApi::new()
        .respond_json("/posts", json!([]))
        .respond_json("/users", json!([]));
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    pump(&mut app, &mut rx).await;

    let data = app.dashboard.data().expect("dashboard loaded");
    assert!(data.posts_per_user.is_empty());
    assert!(data.title_lengths.is_empty());
    assert!(render_text(&mut app, 120, 40).contains("No posts"));
}

#[tokio::test]
async fn test_orphaned_post_shows_unknown_user() {
    let api = TestApi::new()
        .respond_json("/posts", json!([post_json(1, json!(99), "orphaned title")]))
        .respond_json("/users", sample_users());
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    pump(&mut app, &mut rx).await;

    let data = app.dashboard.data().unwrap();
    assert_eq!(data.cards()[0].author, "Unknown User");
    assert!(data.posts_per_user.iter().all(|e| e.post_count == 0));
}

#[tokio::test]
async fn test_stale_dashboard_result_is_dropped() {
    let api = TestApi::new()
        .with_dashboard_data()
        .respond_json("/posts/1", post_json(1, json!(null), "sunt aut "));
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    app.navigate("/posts/1");

    let first = pump(&mut app, &mut rx).await;
    let second = pump(&mut app, &mut rx).await;

    // Only the detail load belongs to the mounted view
    assert!(first ^ second);
    assert!(app.dashboard.state().is_idle());
    assert!(app.post_detail.state().loaded().is_some());
}

#[tokio::test]
async fn test_returning_home_refetches() {
    let api = TestApi::new().with_dashboard_data();
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    pump(&mut app, &mut rx).await;
    assert_eq!(api.request_count(), 2);

    app.go_home();
    assert!(app.dashboard.state().is_loading());
    pump(&mut app, &mut rx).await;

    assert_eq!(api.request_count(), 4);
    assert!(app.dashboard.data().is_some());
}

#[tokio::test]
async fn test_keyboard_selects_and_opens_post() {
    let api = TestApi::new()
        .with_dashboard_data()
        .respond_json("/posts/2", post_json(2, json!(1), "qui est esse"))
        .respond_json("/users/1", user_json(1, "Leanne Graham", "Bret"));
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    pump(&mut app, &mut rx).await;
    render_text(&mut app, 140, 50);
    assert_eq!(app.grid_columns, 3);

    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.dashboard.selected_index(), 1);
    app.handle_key(key(KeyCode::Down));
    // Clamped to the last card
    assert_eq!(app.dashboard.selected_index(), 3);
    app.handle_key(key(KeyCode::Char('k')));
    assert_eq!(app.dashboard.selected_index(), 0);
    app.handle_key(key(KeyCode::Char('l')));

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(
        app.route,
        Route::PostDetail {
            post_id: "2".to_string()
        }
    );
    pump(&mut app, &mut rx).await;

    let detail = app.post_detail.state().loaded().expect("detail loaded");
    assert_eq!(detail.post.id, 2);
    assert_eq!(detail.author.as_ref().map(|u| u.username.as_str()), Some("Bret"));
}

#[tokio::test]
async fn test_quit_keys() {
    let api = TestApi::new();
    let (mut app, _rx) = test_app(&api);

    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);

    let (mut app, _rx) = test_app(&api);
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_state_is_loading_while_fetch_pending() {
    let api = TestApi::new()
        .respond("/posts", MockResponse::Pending)
        .respond("/users", MockResponse::Pending);
    let (mut app, mut rx) = test_app(&api);

    app.navigate("/");
    tokio::task::yield_now().await;

    assert!(matches!(app.dashboard.state(), FetchState::Loading));
    assert!(rx.try_recv().is_err());
    assert!(app.is_loading());
}
