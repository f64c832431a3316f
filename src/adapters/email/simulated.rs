//! Simulated email sender.
//!
//! Nothing leaves the process: each send is logged and the recipient is
//! remembered so callers can inspect what would have been delivered.
//!
//! # Usage
//!
//! ```
//! use user_directory::adapters::SimulatedMailer;
//! use user_directory::ports::EmailSender;
//!
//! let mailer = SimulatedMailer::new();
//! mailer.send_welcome("ana@email.com").unwrap();
//! assert_eq!(mailer.sent_to(), vec!["ana@email.com".to_string()]);
//!
//! // Or a mailer that rejects everything:
//! let failing = SimulatedMailer::failing();
//! assert!(failing.send_welcome("ana@email.com").is_err());
//! ```

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::EmailSender;

/// EmailSender that never touches the network.
#[derive(Debug, Default)]
pub struct SimulatedMailer {
    /// Whether every send should fail.
    reject_all: bool,
    /// Recipients of successful sends, oldest first.
    sent: Mutex<Vec<String>>,
}

impl SimulatedMailer {
    /// Create a mailer that accepts every send.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mailer that rejects every send (for testing failure flows).
    pub fn failing() -> Self {
        Self {
            reject_all: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Recipients of all successful sends.
    pub fn sent_to(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl EmailSender for SimulatedMailer {
    fn send_welcome(&self, to: &str) -> Result<(), DomainError> {
        if self.reject_all {
            return Err(
                DomainError::new(ErrorCode::EmailDeliveryFailed, "Simulated delivery failure")
                    .with_detail("recipient", to),
            );
        }

        debug!(recipient = to, "Simulated welcome email");
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(to.to_string());
        Ok(())
    }
}
