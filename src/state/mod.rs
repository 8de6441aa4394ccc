//! State management for the dashboard.
//!
//! A single [`Store`] holds the UI flags and app-level state and is updated
//! by reducing [`Action`]s. Components that cannot borrow the store (such as
//! the HTTP client) dispatch actions through an [`ActionDispatcher`].

mod app_state;
mod ui_state;

pub use app_state::AppState;
pub use ui_state::{Theme, UiState};

use crate::api::{Navigator, Notifier};
use crate::config::UiConfig;
use crate::error::Result;
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // UI flags
    ToggleSidebar,
    ToggleTheme,
    SetLoading(bool),

    // Notifications
    ShowNotification(Notification),
    DismissNotification,

    // Navigation
    /// Request a route change; resolved by the app through the router.
    Navigate(String),
    /// A navigation completed.
    RouteChanged { path: String, title: String },

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration_secs: 3,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration_secs: 3,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration_secs: 5,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration_secs: 10,
        }
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// UI flags.
    pub ui: UiState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            app: AppState::new(),
            ui: UiState::new(),
            action_tx,
        }
    }

    /// Create a store whose UI flags start from the configuration.
    pub fn with_config(action_tx: mpsc::UnboundedSender<Action>, config: &UiConfig) -> Self {
        let mut store = Self::new(action_tx);
        store.ui.theme = config.theme;
        store.ui.sidebar_collapsed = config.sidebar_collapsed;
        store
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// A dispatcher sharing this store's channel.
    pub fn dispatcher(&self) -> ActionDispatcher {
        ActionDispatcher::new(self.action_tx.clone())
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // UI flags
            Action::ToggleSidebar => self.ui.toggle_sidebar(),
            Action::ToggleTheme => self.ui.toggle_theme(),
            Action::SetLoading(loading) => self.ui.set_loading(loading),

            // Notifications
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
                self.app.notifications_shown += 1;
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }

            // Navigation
            Action::Navigate(_) => {}
            Action::RouteChanged { path, title } => {
                self.app.current_path = path;
                self.app.title = title;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }
}

/// Forwards client-side effects into the store's action channel.
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
    action_tx: mpsc::UnboundedSender<Action>,
}

impl ActionDispatcher {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    fn send(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            tracing::warn!("Dropped action, store is gone: {:?}", e.0);
        }
    }
}

impl Notifier for ActionDispatcher {
    fn notify(&self, notification: Notification) {
        self.send(Action::ShowNotification(notification));
    }
}

impl Navigator for ActionDispatcher {
    fn navigate(&self, path: &str) {
        self.send(Action::Navigate(path.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> (Store, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Store::new(tx), rx)
    }

    #[test]
    fn test_reduce_ui_flags() {
        let (mut store, _rx) = store();
        store.reduce(Action::ToggleTheme);
        assert!(!store.ui.is_dark());
        store.reduce(Action::ToggleSidebar);
        assert!(store.ui.sidebar_collapsed);
        store.reduce(Action::SetLoading(true));
        assert!(store.ui.loading);
        store.reduce(Action::ToggleTheme);
        store.reduce(Action::ToggleSidebar);
        assert!(store.ui.is_dark());
        assert!(!store.ui.sidebar_collapsed);
    }

    #[test]
    fn test_reduce_notifications() {
        let (mut store, _rx) = store();
        store.reduce(Action::ShowNotification(Notification::error("Server error")));
        assert_eq!(
            store.app.notification.as_ref().map(|n| n.message.as_str()),
            Some("Server error")
        );
        assert_eq!(store.app.notifications_shown, 1);
        store.reduce(Action::DismissNotification);
        assert!(store.app.notification.is_none());
    }

    #[test]
    fn test_route_changed() {
        let (mut store, _rx) = store();
        store.reduce(Action::RouteChanged {
            path: "/analysis".into(),
            title: "Data Analysis - X".into(),
        });
        assert_eq!(store.app.current_path, "/analysis");
        assert_eq!(store.app.title, "Data Analysis - X");
    }

    #[test]
    fn test_with_config() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let store = Store::with_config(
            tx,
            &UiConfig {
                theme: Theme::Light,
                sidebar_collapsed: true,
            },
        );
        assert!(!store.ui.is_dark());
        assert!(store.ui.sidebar_collapsed);
    }

    #[test]
    fn test_dispatcher_forwards_effects() {
        let (store, mut rx) = store();
        let dispatcher = store.dispatcher();
        dispatcher.notify(Notification::error("Access denied"));
        dispatcher.navigate("/login");

        assert_eq!(
            rx.try_recv().unwrap(),
            Action::ShowNotification(Notification::error("Access denied"))
        );
        assert_eq!(rx.try_recv().unwrap(), Action::Navigate("/login".into()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dispatch_after_receiver_dropped() {
        let (store, rx) = store();
        drop(rx);
        assert!(store.dispatch(Action::Quit).is_err());
        // Dispatcher swallows the failure.
        store.dispatcher().navigate("/");
    }
}
