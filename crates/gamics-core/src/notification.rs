//! Single-slot notification manager.
//!
//! At most one notification is visible. Showing a new one removes the
//! current one immediately; each notification removes itself after its
//! lifetime unless it was already replaced or closed.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::{Dispatch, PageEvent};
use crate::page::{ElementId, Page, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Tag used in the `notification-{tag}` class
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Ionicons glyph shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "information-circle",
            Severity::Success => "checkmark-circle",
            Severity::Error => "alert-circle",
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.tag())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

/// A transient message for the visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub const ROLE: &'static str = "status";
    pub const ARIA_LIVE: &'static str = "polite";
    pub const CLOSE_LABEL: &'static str = "cerrar notificación";
    pub const CLOSE_ICON: &'static str = "close";
}

#[derive(Debug)]
struct Visible {
    notification: Notification,
    close: Option<ElementId>,
    expires: TimerId,
}

#[derive(Debug)]
pub struct NotificationCenter {
    lifetime: Duration,
    next_id: u64,
    visible: Option<Visible>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            next_id: 0,
            visible: None,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// The notification currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.visible.as_ref().map(|visible| &visible.notification)
    }

    /// Replace whatever is visible with a new notification
    pub fn show(
        &mut self,
        page: &mut dyn Page,
        message: impl Into<String>,
        severity: Severity,
    ) -> NotificationId {
        self.dismiss(page);

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification {
            id,
            message: message.into(),
            severity,
        };
        let close = page.mount_notification(&notification);
        let expires = page.set_timeout(self.lifetime);
        debug!(id = id.0, %severity, message = %notification.message, "Notification shown");

        self.visible = Some(Visible {
            notification,
            close,
            expires,
        });
        id
    }

    /// Remove the visible notification, if any
    pub fn dismiss(&mut self, page: &mut dyn Page) -> bool {
        match self.visible.take() {
            Some(visible) => {
                page.unmount_notification();
                debug!(id = visible.notification.id.0, "Notification removed");
                true
            }
            None => false,
        }
    }

    /// Close-control clicks and expiry timers
    pub fn handle(&mut self, page: &mut dyn Page, event: &PageEvent) -> Dispatch {
        let Some(visible) = &self.visible else {
            return Dispatch::IGNORED;
        };
        let owned = match event {
            PageEvent::Click { target } => visible.close == Some(*target),
            PageEvent::Timer(timer) => visible.expires == *timer,
            _ => false,
        };
        if owned {
            self.dismiss(page);
        }
        Dispatch::IGNORED
    }
}
