//! User profile value object

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Bio given to freshly created profiles.
pub const DEFAULT_BIO: &str = "Usuario nuevo";

/// Creation date stamped on freshly created profiles.
pub fn default_created_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default()
}

/// Per-user profile tracking how often the user was active.
///
/// Never mutated in place: recording an access yields a new value that
/// replaces the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    bio: String,
    created_date: NaiveDate,
    access_count: u32,
}

impl Profile {
    /// Create a profile with a single recorded access
    pub fn initial(bio: impl Into<String>, created_date: NaiveDate) -> Self {
        Self {
            bio: bio.into(),
            created_date,
            access_count: 1,
        }
    }

    /// Copy of this profile with one more access recorded
    pub fn with_access_recorded(&self) -> Self {
        Self {
            access_count: self.access_count.saturating_add(1),
            ..self.clone()
        }
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }

    /// ISO-8601 creation date (`YYYY-MM-DD`)
    pub fn created_date_iso(&self) -> String {
        self.created_date.format("%Y-%m-%d").to_string()
    }

    pub fn access_count(&self) -> u32 {
        self.access_count
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::initial(DEFAULT_BIO, default_created_date())
    }
}
