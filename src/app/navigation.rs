//! Navigation methods for the App.
//!
//! Mounting a route resets both views, bumps the generation and spawns the
//! mounted view's load on the tokio runtime.

use tracing::{debug, warn};

use super::{App, AppMessage, Route};
use crate::state::{load_dashboard, load_post_detail, DashboardState, PostDetailState};

impl App {
    /// Navigate to `path`, mounting the view it dispatches to.
    pub fn navigate(&mut self, path: &str) {
        self.mount(Route::parse(path));
    }

    /// Mount `route`, tearing down whatever was mounted before.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self, route: Route) {
        self.generation += 1;
        debug!(path = %route.path(), generation = self.generation, "Navigate");

        self.dashboard = DashboardState::new();
        self.post_detail = PostDetailState::new();
        self.route = route.clone();
        self.mark_dirty();

        match route {
            Route::Dashboard => {
                self.dashboard.begin();
                self.spawn_dashboard_load();
            }
            Route::PostDetail { post_id } => {
                if self.post_detail.begin(&post_id) {
                    self.spawn_post_detail_load(post_id);
                }
            }
            Route::NotFound { .. } => {}
        }
    }

    /// Return to the dashboard.
    pub fn go_home(&mut self) {
        self.mount(Route::Dashboard);
    }

    /// Open the detail view of the selected post card.
    pub fn open_selected_post(&mut self) {
        if let Some(path) = self.dashboard.selected_post().map(|post| post.detail_path()) {
            self.navigate(&path);
        }
    }

    /// Move the card selection one column left or right.
    pub fn select_horizontal(&mut self, delta: isize) {
        self.dashboard.move_selection(delta);
        self.mark_dirty();
    }

    /// Move the card selection one row up or down.
    pub fn select_vertical(&mut self, rows: isize) {
        let columns = self.grid_columns.max(1) as isize;
        self.dashboard.move_selection(rows * columns);
        self.mark_dirty();
    }

    /// Open the loaded author's website in the system browser.
    ///
    /// Returns the URL that was opened.
    pub fn open_author_website(&self) -> Option<String> {
        let author = self.post_detail.state().loaded()?.author.as_ref()?;
        let url = author.website_url();
        if let Err(e) = webbrowser::open(&url) {
            warn!(url = %url, error = %e, "Failed to open website");
            return None;
        }
        Some(url)
    }

    fn spawn_dashboard_load(&self) {
        let api = self.api().clone();
        let tx = self.message_tx.clone();
        let generation = self.generation;

        tokio::spawn(async move {
            let result = load_dashboard(&api).await;
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(AppMessage::DashboardLoaded { generation, result });
        });
    }

    fn spawn_post_detail_load(&self, post_id: String) {
        let api = self.api().clone();
        let tx = self.message_tx.clone();
        let generation = self.generation;

        tokio::spawn(async move {
            let result = load_post_detail(&api, &post_id).await;
            let _ = tx.send(AppMessage::PostDetailLoaded { generation, result });
        });
    }
}
