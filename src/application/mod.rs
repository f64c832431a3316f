//! Application layer - the user directory service.
//!
//! Orchestrates domain records and calls out through the notifier and
//! email ports. Query results are tagged values; they become the
//! user-visible strings only when rendered.

mod outcomes;
mod settings;
mod user_directory;

pub use outcomes::{
    ActivityOutcome, DirectorySummary, UserReport, THEME_NOT_CONFIGURED, USER_DOES_NOT_EXIST,
    USER_INACTIVE, USER_NOT_FOUND,
};
pub use settings::DirectorySettings;
pub use user_directory::UserDirectory;
