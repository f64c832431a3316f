//! In-memory notifier for testing.
//!
//! Captures every event so tests can assert on the side effects of
//! directory operations and on their order.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use std::sync::RwLock;

use crate::domain::user::DirectoryEvent;
use crate::ports::DirectoryNotifier;

/// In-memory notifier that records events.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use user_directory::adapters::{InMemoryNotifier, SimulatedMailer};
/// use user_directory::application::UserDirectory;
/// use user_directory::domain::foundation::UserId;
///
/// let notifier = Arc::new(InMemoryNotifier::new());
/// let mut directory = UserDirectory::new(notifier.clone(), Arc::new(SimulatedMailer::new()));
/// directory.create_user(UserId::new(1), "Ana", "ana@email.com", 22);
///
/// assert_eq!(notifier.event_count(), 1);
/// assert!(notifier.has_event("user.created"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    events: RwLock<Vec<DirectoryEvent>>,
}

impl InMemoryNotifier {
    /// Creates a new empty notifier.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Returns all recorded events in delivery order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn events(&self) -> Vec<DirectoryEvent> {
        self.events
            .read()
            .expect("InMemoryNotifier: events lock poisoned")
            .clone()
    }

    /// Returns the kinds of all recorded events in delivery order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events().iter().map(DirectoryEvent::kind).collect()
    }

    /// Returns count of recorded events.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn event_count(&self) -> usize {
        self.events
            .read()
            .expect("InMemoryNotifier: events lock poisoned")
            .len()
    }

    /// Checks if an event of the given kind was recorded.
    pub fn has_event(&self, kind: &str) -> bool {
        self.events().iter().any(|e| e.kind() == kind)
    }

    /// Clears all recorded events (for test isolation).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.events
            .write()
            .expect("InMemoryNotifier: events write lock poisoned")
            .clear();
    }
}

impl DirectoryNotifier for InMemoryNotifier {
    fn notify(&self, event: &DirectoryEvent) {
        self.events
            .write()
            .expect("InMemoryNotifier: events write lock poisoned")
            .push(event.clone());
    }
}
