//! Notifier that forwards each event to several notifiers.

use std::sync::Arc;

use crate::domain::user::DirectoryEvent;
use crate::ports::DirectoryNotifier;

/// Forwards every event to each inner notifier, in registration order.
#[derive(Clone, Default)]
pub struct FanoutNotifier {
    targets: Vec<Arc<dyn DirectoryNotifier>>,
}

impl FanoutNotifier {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Add a notifier to the end of the chain.
    pub fn with(mut self, target: Arc<dyn DirectoryNotifier>) -> Self {
        self.targets.push(target);
        self
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl DirectoryNotifier for FanoutNotifier {
    fn notify(&self, event: &DirectoryEvent) {
        for target in &self.targets {
            target.notify(event);
        }
    }
}
