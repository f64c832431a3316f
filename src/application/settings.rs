//! Tunables of the user directory

use chrono::NaiveDate;

use crate::domain::user::{default_created_date, DEFAULT_BIO, DEFAULT_YOUNG_AGE_LIMIT};

/// Values the directory stamps onto derived records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySettings {
    /// Users younger than this get the dark theme
    pub young_age_limit: u32,
    /// Bio of newly created profiles
    pub initial_bio: String,
    /// Creation date of newly created profiles
    pub profile_date: NaiveDate,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            young_age_limit: DEFAULT_YOUNG_AGE_LIMIT,
            initial_bio: DEFAULT_BIO.to_string(),
            profile_date: default_created_date(),
        }
    }
}
