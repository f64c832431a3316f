//! Notifications emitted by the user directory

use crate::domain::foundation::UserId;
use serde::{Deserialize, Serialize};

use super::Theme;

/// Side effects signalled by directory operations, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DirectoryEvent {
    /// A user was added to the directory
    UserCreated { user_id: UserId, name: String },

    /// A configuration was derived and stored
    UserConfigured { user_id: UserId, theme: Theme },

    /// The welcome email went out
    WelcomeEmailSent { user_id: UserId, email: String },

    /// A profile was created (or replaced)
    ProfileCreated { user_id: UserId, name: String },

    /// Activity was recorded; `access_count` is `None` when the user has no profile
    ActivityProcessed {
        user_id: UserId,
        access_count: Option<u32>,
    },
}

impl DirectoryEvent {
    /// Routing key, e.g. `"user.created"`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserCreated { .. } => "user.created",
            Self::UserConfigured { .. } => "user.configured",
            Self::WelcomeEmailSent { .. } => "user.welcome_email_sent",
            Self::ProfileCreated { .. } => "profile.created",
            Self::ActivityProcessed { .. } => "activity.processed",
        }
    }

    pub fn user_id(&self) -> UserId {
        match self {
            Self::UserCreated { user_id, .. }
            | Self::UserConfigured { user_id, .. }
            | Self::WelcomeEmailSent { user_id, .. }
            | Self::ProfileCreated { user_id, .. }
            | Self::ActivityProcessed { user_id, .. } => *user_id,
        }
    }

    /// Line echoed on the console for this event.
    ///
    /// Activity has none: its outcome is returned to the caller instead.
    pub fn console_line(&self) -> Option<String> {
        match self {
            Self::UserCreated { name, .. } => Some(format!("Usuario creado: {}", name)),
            Self::UserConfigured { theme, .. } => Some(format!("Configurado tema: {}", theme)),
            Self::WelcomeEmailSent { email, .. } => Some(format!("Email enviado a: {}", email)),
            Self::ProfileCreated { name, .. } => Some(format!("Perfil creado para: {}", name)),
            Self::ActivityProcessed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_created_console_line() {
        let event = DirectoryEvent::UserCreated {
            user_id: UserId::new(1),
            name: "Ana".to_string(),
        };
        assert_eq!(event.console_line().as_deref(), Some("Usuario creado: Ana"));
        assert_eq!(event.kind(), "user.created");
    }

    #[test]
    fn configured_console_line_uses_theme_name() {
        let event = DirectoryEvent::UserConfigured {
            user_id: UserId::new(1),
            theme: Theme::Dark,
        };
        assert_eq!(event.console_line().as_deref(), Some("Configurado tema: dark"));
    }

    #[test]
    fn activity_has_no_console_line() {
        let event = DirectoryEvent::ActivityProcessed {
            user_id: UserId::new(4),
            access_count: Some(3),
        };
        assert!(event.console_line().is_none());
        assert_eq!(event.user_id(), UserId::new(4));
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let event = DirectoryEvent::WelcomeEmailSent {
            user_id: UserId::new(2),
            email: "luis@email.com".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "welcome_email_sent");
        assert_eq!(json["user_id"], 2);
        assert_eq!(json["email"], "luis@email.com");

        let back: DirectoryEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
