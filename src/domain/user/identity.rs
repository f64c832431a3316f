//! User identity record

use crate::domain::foundation::UserId;
use serde::{Deserialize, Serialize};

/// Identity record of a directory user.
///
/// Immutable once built. Activity is tracked on the user's [`Profile`]
/// instead of here.
///
/// [`Profile`]: super::Profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    age: i32,
    active: bool,
}

impl User {
    /// Create an active user
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            active: true,
        }
    }

    /// Copy of this user marked inactive
    pub fn deactivated(&self) -> Self {
        Self {
            active: false,
            ..self.clone()
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
