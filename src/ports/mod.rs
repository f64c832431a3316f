//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the directory and the outside world. Adapters implement these ports.
//!
//! - `DirectoryNotifier` - Receives the side-effect notifications of directory operations
//! - `EmailSender` - Delivers the welcome email sent on profile creation

mod directory_notifier;
mod email_sender;

pub use directory_notifier::DirectoryNotifier;
pub use email_sender::EmailSender;
