//! User-visible notifications
//!
//! Wallet and payment operations report their outcome as a `Notification`
//! on a broadcast channel. The UI turns them into toasts.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Capacity of the notification channel created by `channel()`
pub const NOTIFICATION_CAPACITY: usize = 32;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Failures the user has to act on
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Create a notification channel
pub fn channel() -> (broadcast::Sender<Notification>, broadcast::Receiver<Notification>) {
    broadcast::channel(NOTIFICATION_CAPACITY)
}

/// Publish without caring whether anybody listens
pub(crate) fn notify(sender: &broadcast::Sender<Notification>, notification: Notification) {
    tracing::debug!(title = %notification.title, "Notification");
    let _ = sender.send(notification);
}
