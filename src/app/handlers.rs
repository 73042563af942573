//! Key and message handlers for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::{App, AppMessage, Route};

impl App {
    /// Apply a background load result.
    ///
    /// Results from an older generation belong to a view that has been torn
    /// down and are dropped. Returns whether the result was applied.
    pub fn handle_message(&mut self, message: AppMessage) -> bool {
        if message.generation() != self.generation() {
            debug!(
                message_generation = message.generation(),
                current_generation = self.generation(),
                "Discarding stale load result"
            );
            return false;
        }

        let applied = match message {
            AppMessage::DashboardLoaded { result, .. } => self.dashboard.apply(result),
            AppMessage::PostDetailLoaded { result, .. } => self.post_detail.apply(result),
        };
        if applied {
            self.mark_dirty();
        }
        applied
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        // Global keybinds
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            _ => {}
        }

        match self.route {
            Route::Dashboard => self.handle_dashboard_key(key),
            Route::PostDetail { .. } => self.handle_post_detail_key(key),
            Route::NotFound { .. } => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter | KeyCode::Char('b')
                ) {
                    self.go_home();
                }
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.select_horizontal(-1),
            KeyCode::Right | KeyCode::Char('l') => self.select_horizontal(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_vertical(-1),
            KeyCode::Down | KeyCode::Char('j') => self.select_vertical(1),
            KeyCode::Enter => self.open_selected_post(),
            _ => {}
        }
    }

    fn handle_post_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.go_home(),
            // The failed view offers "Go to Dashboard" as its only control
            KeyCode::Enter if self.post_detail.state().error().is_some() => self.go_home(),
            KeyCode::Char('w') => {
                if let Some(url) = self.open_author_website() {
                    debug!(url = %url, "Opened author website");
                }
            }
            _ => {}
        }
    }
}
