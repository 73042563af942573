//! Application shell for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Route`] - Which view the current path dispatches to
//! - [`AppMessage`] - Results of background loads

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::Route;

use tokio::sync::mpsc;

use crate::api::PlaceholderApi;
use crate::state::{DashboardState, PostDetailState};

/// Main application state
pub struct App {
    /// Currently mounted route
    pub route: Route,
    /// Dashboard view state (reset whenever another route is mounted)
    pub dashboard: DashboardState,
    /// Post detail view state (reset whenever another route is mounted)
    pub post_detail: PostDetailState,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Whether the UI must be redrawn on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Columns of the post grid at the last render, for up/down navigation
    pub grid_columns: usize,
    /// Receiver for load results (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to background loads
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// API client shared with background loads
    api: PlaceholderApi,
    /// Bumped on every navigation; stale load results are dropped
    generation: u64,
}

impl App {
    /// Create an app with nothing mounted yet.
    ///
    /// Call [`App::navigate`] to mount the initial route.
    pub fn new(api: PlaceholderApi) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            route: Route::default(),
            dashboard: DashboardState::new(),
            post_detail: PostDetailState::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            grid_columns: 1,
            message_rx: Some(message_rx),
            message_tx,
            api,
            generation: 0,
        }
    }

    pub fn api(&self) -> &PlaceholderApi {
        &self.api
    }

    /// Generation of the currently mounted route.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether any view is waiting on a load.
    pub fn is_loading(&self) -> bool {
        match self.route {
            Route::Dashboard => self.dashboard.state().is_loading(),
            Route::PostDetail { .. } => self.post_detail.state().is_loading(),
            Route::NotFound { .. } => false,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
