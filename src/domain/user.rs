//! User aggregate.

use super::{Aggregate, Email, EntityId, Name, PasswordHash};
use serde::Serialize;

/// Identifier of a [`User`].
pub type UserId = EntityId<User>;

/// A user account.
///
/// The password hash is never serialized, so user snapshots can travel in
/// event payloads and audit logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: Option<UserId>,
    name: Name,
    email: Email,
    #[serde(skip)]
    password_hash: PasswordHash,
}

impl User {
    /// Create a user that has not been persisted yet.
    pub fn new(name: Name, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
        }
    }

    /// Rebuild a persisted user.
    pub fn restore(id: UserId, name: Name, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            password_hash,
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn rename(&mut self, name: Name) {
        self.name = name;
    }

    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }

    pub fn change_password_hash(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}

impl Aggregate for User {
    fn id(&self) -> Option<UserId> {
        self.id
    }

    fn assign_id(&mut self, id: UserId) {
        self.id = Some(id);
    }
}
