//! User module - identity, derived configuration and profile records
//!
//! # Domain Invariants
//!
//! 1. A `User` never changes after construction
//! 2. A `Configuration` is a pure function of the user's age
//! 3. A new `Profile` starts with exactly one recorded access
//! 4. Profiles are replaced, never mutated in place
//!
//! Records are associated only by `UserId`; nothing enforces that a
//! configuration or profile belongs to an existing user.

pub mod configuration;
pub mod events;
pub mod identity;
pub mod profile;

// Re-exports for public API
pub use configuration::{Configuration, Theme, DEFAULT_YOUNG_AGE_LIMIT};
pub use events::DirectoryEvent;
pub use identity::User;
pub use profile::{default_created_date, Profile, DEFAULT_BIO};
