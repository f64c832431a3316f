//! EmailSender port for outbound user email

use crate::domain::foundation::DomainError;

/// Sends email to directory users.
pub trait EmailSender: Send + Sync {
    /// Send the welcome email that accompanies a new profile
    fn send_welcome(&self, to: &str) -> Result<(), DomainError>;
}
