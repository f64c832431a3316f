//! Notification configuration

use serde::Deserialize;

/// Where directory notifications are delivered
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    /// Echo notifications to stdout
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            console: default_console(),
        }
    }
}

fn default_console() -> bool {
    true
}
