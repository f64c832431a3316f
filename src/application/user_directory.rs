//! UserDirectory - in-memory service owning users and their derived records.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{Configuration, DirectoryEvent, Profile, User};
use crate::ports::{DirectoryNotifier, EmailSender};

use super::outcomes::{ActivityOutcome, DirectorySummary, UserReport, USER_NOT_FOUND};
use super::settings::DirectorySettings;

/// Directory of users, their configurations and their profiles.
///
/// The three collections are associated only by [`UserId`]. Ids are not
/// checked for uniqueness; lookups resolve to the first user added with a
/// given id.
///
/// Every operation is total: lookups that miss are reported through
/// [`ActivityOutcome`] or the sentinel strings, never by panicking.
pub struct UserDirectory {
    users: Vec<User>,
    configurations: HashMap<UserId, Configuration>,
    profiles: HashMap<UserId, Profile>,
    settings: DirectorySettings,
    notifier: Arc<dyn DirectoryNotifier>,
    mailer: Arc<dyn EmailSender>,
}

impl UserDirectory {
    pub fn new(notifier: Arc<dyn DirectoryNotifier>, mailer: Arc<dyn EmailSender>) -> Self {
        Self::with_settings(DirectorySettings::default(), notifier, mailer)
    }

    pub fn with_settings(
        settings: DirectorySettings,
        notifier: Arc<dyn DirectoryNotifier>,
        mailer: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            users: Vec::new(),
            configurations: HashMap::new(),
            profiles: HashMap::new(),
            settings,
            notifier,
            mailer,
        }
    }

    /// Create an active user and add it to the directory.
    pub fn create_user(
        &mut self,
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
    ) -> User {
        self.add_user(User::new(id, name, email, age))
    }

    /// Add an already-built user (active or not).
    pub fn add_user(&mut self, user: User) -> User {
        self.users.push(user.clone());
        info!(user_id = user.id().as_i64(), active = user.is_active(), "User added");

        self.notifier.notify(&DirectoryEvent::UserCreated {
            user_id: user.id(),
            name: user.name().to_string(),
        });
        user
    }

    /// Derive and store the configuration for `user`, replacing any previous one.
    pub fn configure_user(&mut self, user: &User) -> Configuration {
        let config = Configuration::for_age(user.age(), self.settings.young_age_limit);
        self.configurations.insert(user.id(), config);
        info!(user_id = user.id().as_i64(), theme = %config.theme, "User configured");

        self.notifier.notify(&DirectoryEvent::UserConfigured {
            user_id: user.id(),
            theme: config.theme,
        });
        config
    }

    /// Create a fresh profile for `user`, replacing any previous one, and
    /// send the welcome email.
    ///
    /// A failed email is logged and does not affect the stored profile.
    pub fn create_profile(&mut self, user: &User) -> Profile {
        let profile = Profile::initial(self.settings.initial_bio.clone(), self.settings.profile_date);
        self.profiles.insert(user.id(), profile.clone());
        info!(user_id = user.id().as_i64(), "Profile created");

        match self.mailer.send_welcome(user.email()) {
            Ok(()) => self.notifier.notify(&DirectoryEvent::WelcomeEmailSent {
                user_id: user.id(),
                email: user.email().to_string(),
            }),
            Err(e) => warn!(
                user_id = user.id().as_i64(),
                "Welcome email not sent: {}", e
            ),
        }

        self.notifier.notify(&DirectoryEvent::ProfileCreated {
            user_id: user.id(),
            name: user.name().to_string(),
        });
        profile
    }

    /// Build the report for `user_id`.
    pub fn report(&self, user_id: UserId) -> Result<UserReport, DomainError> {
        let user = self.find_user(user_id).ok_or_else(|| {
            DomainError::new(ErrorCode::UserNotFound, format!("User {} not found", user_id))
        })?;

        Ok(UserReport {
            name: user.name().to_string(),
            email: user.email().to_string(),
            age: user.age(),
            theme: self.configurations.get(&user_id).map(|c| c.theme),
            access_count: self
                .profiles
                .get(&user_id)
                .map(Profile::access_count)
                .unwrap_or(0),
        })
    }

    /// Multi-line report for `user_id`, or `"Usuario no encontrado"`.
    pub fn generate_report(&self, user_id: UserId) -> String {
        match self.report(user_id) {
            Ok(report) => report.to_string(),
            Err(e) => {
                debug!("Report requested for unknown user: {}", e);
                USER_NOT_FOUND.to_string()
            }
        }
    }

    /// Record activity for `user_id`.
    ///
    /// Active users with a profile get their access count bumped by one.
    /// Active users without a profile are still reported as processed.
    pub fn record_activity(&mut self, user_id: UserId) -> ActivityOutcome {
        let (name, active) = match self.find_user(user_id) {
            Some(user) => (user.name().to_string(), user.is_active()),
            None => {
                debug!(user_id = user_id.as_i64(), "Activity for unknown user");
                return ActivityOutcome::NotFound;
            }
        };

        if !active {
            debug!(user_id = user_id.as_i64(), "Activity for inactive user");
            return ActivityOutcome::Inactive;
        }

        let access_count = match self.profiles.get(&user_id) {
            Some(profile) => {
                let updated = profile.with_access_recorded();
                let count = updated.access_count();
                self.profiles.insert(user_id, updated);
                Some(count)
            }
            None => None,
        };
        info!(user_id = user_id.as_i64(), access_count = ?access_count, "Activity processed");

        self.notifier.notify(&DirectoryEvent::ActivityProcessed {
            user_id,
            access_count,
        });
        ActivityOutcome::Processed { name, access_count }
    }

    /// Record activity and render the outcome as text.
    pub fn process_activity(&mut self, user_id: UserId) -> String {
        self.record_activity(user_id).to_string()
    }

    pub fn summary(&self) -> DirectorySummary {
        DirectorySummary {
            total_users: self.users.len(),
            configured_users: self.configurations.len(),
        }
    }

    /// First user added with `user_id`.
    pub fn find_user(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == user_id)
    }

    pub fn configuration(&self, user_id: UserId) -> Option<&Configuration> {
        self.configurations.get(&user_id)
    }

    pub fn profile(&self, user_id: UserId) -> Option<&Profile> {
        self.profiles.get(&user_id)
    }

    /// All users in insertion order, duplicates included.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn settings(&self) -> &DirectorySettings {
        &self.settings
    }
}
