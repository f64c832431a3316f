//! Results of directory queries, rendered to text at the display boundary.

use serde::Serialize;
use std::fmt;

use crate::domain::user::Theme;

/// Shown when a report is requested for an unknown user.
pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
/// Shown when activity is recorded for an unknown user.
pub const USER_DOES_NOT_EXIST: &str = "Usuario no existe";
/// Shown when activity is recorded for an inactive user.
pub const USER_INACTIVE: &str = "Usuario inactivo";
/// Theme label for users that were never configured.
pub const THEME_NOT_CONFIGURED: &str = "Sin configurar";

/// Outcome of recording activity for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityOutcome {
    NotFound,
    Inactive,
    /// Activity was recorded. `access_count` is the new count, or `None`
    /// when the user has no profile to update.
    Processed {
        name: String,
        access_count: Option<u32>,
    },
}

impl ActivityOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed { .. })
    }
}

impl fmt::Display for ActivityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str(USER_DOES_NOT_EXIST),
            Self::Inactive => f.write_str(USER_INACTIVE),
            Self::Processed { name, .. } => write!(f, "Actividad procesada para {}", name),
        }
    }
}

/// Snapshot of a user with their configured theme and access count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub name: String,
    pub email: String,
    pub age: i32,
    /// `None` until the user is configured
    pub theme: Option<Theme>,
    /// Zero when the user has no profile
    pub access_count: u32,
}

// Lines carry no trailing whitespace, including the `Email:` line that
// older renderings padded with two spaces.
impl fmt::Display for UserReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Usuario: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Edad: {}", self.age)?;
        match self.theme {
            Some(theme) => writeln!(f, "Tema: {}", theme)?,
            None => writeln!(f, "Tema: {}", THEME_NOT_CONFIGURED)?,
        }
        write!(f, "Accesos: {}", self.access_count)
    }
}

/// Directory-wide counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub total_users: usize,
    pub configured_users: usize,
}

impl fmt::Display for DirectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total usuarios: {}, Configurados: {}",
            self.total_users, self.configured_users
        )
    }
}
