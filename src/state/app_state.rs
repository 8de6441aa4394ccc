//! Application-level state.

use super::Notification;

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Path of the current route.
    pub current_path: String,
    /// Page title set by the navigation guard.
    pub title: String,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Number of notifications shown since start.
    pub notifications_shown: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create a new application state.
    pub fn new() -> Self {
        Self {
            current_path: "/".to_string(),
            ..Default::default()
        }
    }

    /// Check if the current route is the login page.
    pub fn on_login_page(&self) -> bool {
        self.current_path == crate::api::LOGIN_PATH
    }
}
