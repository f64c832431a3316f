//! Notifier adapters.
//!
//! - `ConsoleNotifier` - Echoes events as plain lines (stdout by default)
//! - `TracingNotifier` - Structured log records via `tracing`
//! - `InMemoryNotifier` - Captures events for test assertions
//! - `FanoutNotifier` - Forwards to several notifiers

mod console;
mod fanout;
mod in_memory;
mod tracing_notifier;

pub use console::ConsoleNotifier;
pub use fanout::FanoutNotifier;
pub use in_memory::InMemoryNotifier;
pub use tracing_notifier::TracingNotifier;
