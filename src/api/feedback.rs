//! User-facing side effects of failed calls.

use crate::state::{Notification, NotificationLevel};

/// Shows notifications to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Issues client-side navigations.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Fallback that only writes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedback;

impl Notifier for LogFeedback {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => tracing::error!("{}", notification.message),
            NotificationLevel::Warning => tracing::warn!("{}", notification.message),
            NotificationLevel::Info | NotificationLevel::Success => {
                tracing::info!("{}", notification.message)
            }
        }
    }
}

impl Navigator for LogFeedback {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "Navigation requested");
    }
}
