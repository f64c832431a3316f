//! Display configuration derived from a user's age

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age below which users get the dark theme and notifications.
pub const DEFAULT_YOUNG_AGE_LIMIT: u32 = 25;

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Dark,
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Per-user display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub theme: Theme,
    pub notifications_enabled: bool,
}

impl Configuration {
    /// Derive the configuration for `age`.
    ///
    /// Users younger than `young_age_limit` get `{Dark, notifications on}`,
    /// everyone else `{Light, notifications off}`. Negative ages count as young.
    pub fn for_age(age: i32, young_age_limit: u32) -> Self {
        if i64::from(age) < i64::from(young_age_limit) {
            Self {
                theme: Theme::Dark,
                notifications_enabled: true,
            }
        } else {
            Self {
                theme: Theme::Light,
                notifications_enabled: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_age_gets_light_theme() {
        let config = Configuration::for_age(25, DEFAULT_YOUNG_AGE_LIMIT);
        assert_eq!(config.theme, Theme::Light);
        assert!(!config.notifications_enabled);
    }

    #[test]
    fn one_below_boundary_gets_dark_theme() {
        let config = Configuration::for_age(24, DEFAULT_YOUNG_AGE_LIMIT);
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.notifications_enabled);
    }

    #[test]
    fn negative_age_gets_dark_theme() {
        let config = Configuration::for_age(-1, DEFAULT_YOUNG_AGE_LIMIT);
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.notifications_enabled);
    }

    #[test]
    fn theme_displays_lowercase() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    proptest! {
        #[test]
        fn young_users_get_dark_theme(age in -200i32..25) {
            let config = Configuration::for_age(age, DEFAULT_YOUNG_AGE_LIMIT);
            prop_assert_eq!(config.theme, Theme::Dark);
            prop_assert!(config.notifications_enabled);
        }

        #[test]
        fn older_users_get_light_theme(age in 25i32..200) {
            let config = Configuration::for_age(age, DEFAULT_YOUNG_AGE_LIMIT);
            prop_assert_eq!(config.theme, Theme::Light);
            prop_assert!(!config.notifications_enabled);
        }
    }
}
