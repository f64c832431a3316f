//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the directory to its collaborators:
//! - `notifications` - Console, log, in-memory and fan-out notifiers
//! - `email` - Simulated welcome-email delivery

pub mod email;
pub mod notifications;

pub use email::SimulatedMailer;
pub use notifications::{ConsoleNotifier, FanoutNotifier, InMemoryNotifier, TracingNotifier};
