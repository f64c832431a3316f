//! DirectoryNotifier port - Interface for signalling directory side effects.
//!
//! The directory reports what it did (user created, configured, profile
//! created, email sent, activity processed) without knowing whether the
//! signal ends up on the console, in the log, or in a test buffer.

use crate::domain::user::DirectoryEvent;

/// Port for receiving directory notifications.
///
/// Notifications are fire-and-forget: implementations must not fail the
/// operation that produced the event.
pub trait DirectoryNotifier: Send + Sync {
    /// Deliver a single event.
    fn notify(&self, event: &DirectoryEvent);
}
