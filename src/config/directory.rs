//! Directory configuration

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ValidationError;
use crate::application::DirectorySettings;
use crate::domain::user::{default_created_date, DEFAULT_BIO, DEFAULT_YOUNG_AGE_LIMIT};

const MAX_AGE_LIMIT: u32 = 150;

/// Values stamped onto derived user records
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Users younger than this get the dark theme
    #[serde(default = "default_young_age_limit")]
    pub young_age_limit: u32,

    /// Bio of newly created profiles
    #[serde(default = "default_initial_bio")]
    pub initial_bio: String,

    /// Creation date of newly created profiles (`YYYY-MM-DD`)
    #[serde(default = "default_created_date")]
    pub profile_date: NaiveDate,
}

impl DirectoryConfig {
    /// Settings handed to the `UserDirectory`
    pub fn settings(&self) -> DirectorySettings {
        DirectorySettings {
            young_age_limit: self.young_age_limit,
            initial_bio: self.initial_bio.clone(),
            profile_date: self.profile_date,
        }
    }

    /// Validate directory configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.young_age_limit == 0 || self.young_age_limit > MAX_AGE_LIMIT {
            return Err(ValidationError::InvalidAgeLimit(self.young_age_limit));
        }
        if self.initial_bio.trim().is_empty() {
            return Err(ValidationError::EmptyBio);
        }
        Ok(())
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            young_age_limit: default_young_age_limit(),
            initial_bio: default_initial_bio(),
            profile_date: default_created_date(),
        }
    }
}

fn default_young_age_limit() -> u32 {
    DEFAULT_YOUNG_AGE_LIMIT
}

fn default_initial_bio() -> String {
    DEFAULT_BIO.to_string()
}
