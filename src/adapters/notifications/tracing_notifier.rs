//! Notifier that turns directory events into structured log records.

use tracing::info;

use crate::domain::user::DirectoryEvent;
use crate::ports::DirectoryNotifier;

/// Logs every event at `info` with the event kind and user id as fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryNotifier for TracingNotifier {
    fn notify(&self, event: &DirectoryEvent) {
        match event {
            DirectoryEvent::ActivityProcessed {
                user_id,
                access_count,
            } => info!(
                event = event.kind(),
                user_id = user_id.as_i64(),
                access_count = ?access_count,
                "Directory event"
            ),
            _ => info!(
                event = event.kind(),
                user_id = event.user_id().as_i64(),
                detail = %event.console_line().unwrap_or_default(),
                "Directory event"
            ),
        }
    }
}
