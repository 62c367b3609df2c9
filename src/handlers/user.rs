//! User command handlers.

use crate::commands::{CreateUserCommand, DeleteUserCommand, PatchUserCommand, UpdateUserCommand};
use crate::domain::User;
use crate::error::RepositoryResult;
use crate::events::{DomainEvent, EventPublisher};
use crate::repositories::Repository;
use std::sync::Arc;
use tracing::debug;

/// Collaborators shared by the user command handlers.
#[derive(Clone)]
pub struct UserWriteContext {
    pub users: Arc<dyn Repository<User>>,
    pub events: Arc<dyn EventPublisher>,
}

impl UserWriteContext {
    pub fn new(users: Arc<dyn Repository<User>>, events: Arc<dyn EventPublisher>) -> Self {
        Self { users, events }
    }

    async fn commit(&self, mut user: User) -> RepositoryResult<User> {
        self.users.save(&mut user).await?;
        self.events.publish(DomainEvent::updated(user.clone()));
        Ok(user)
    }
}

pub struct CreateUserHandler {
    context: UserWriteContext,
}

impl CreateUserHandler {
    pub fn new(context: UserWriteContext) -> Self {
        Self { context }
    }

    pub async fn handle(&self, command: CreateUserCommand) -> RepositoryResult<User> {
        let mut user = User::new(command.name, command.email, command.password_hash);

        self.context.users.save(&mut user).await?;
        debug!(user_id = ?user.id(), "User created");

        self.context.events.publish(DomainEvent::created(user.clone()));
        Ok(user)
    }
}

/// Full update: name and email are always overwritten, the password hash only
/// when supplied.
pub struct UpdateUserHandler {
    context: UserWriteContext,
}

impl UpdateUserHandler {
    pub fn new(context: UserWriteContext) -> Self {
        Self { context }
    }

    pub async fn handle(&self, command: UpdateUserCommand) -> RepositoryResult<Option<User>> {
        let Some(mut user) = self.context.users.find_by_id(command.id).await? else {
            debug!(user_id = %command.id, "User not found for update");
            return Ok(None);
        };

        user.rename(command.name);
        user.change_email(command.email);
        if let Some(password_hash) = command.password_hash {
            user.change_password_hash(password_hash);
        }

        self.context.commit(user).await.map(Some)
    }
}

pub struct PatchUserHandler {
    context: UserWriteContext,
}

impl PatchUserHandler {
    pub fn new(context: UserWriteContext) -> Self {
        Self { context }
    }

    pub async fn handle(&self, command: PatchUserCommand) -> RepositoryResult<Option<User>> {
        let Some(mut user) = self.context.users.find_by_id(command.id).await? else {
            debug!(user_id = %command.id, "User not found for patch");
            return Ok(None);
        };

        if let Some(name) = command.name {
            user.rename(name);
        }
        if let Some(email) = command.email {
            user.change_email(email);
        }
        if let Some(password_hash) = command.password_hash {
            user.change_password_hash(password_hash);
        }

        self.context.commit(user).await.map(Some)
    }
}

pub struct DeleteUserHandler {
    context: UserWriteContext,
}

impl DeleteUserHandler {
    pub fn new(context: UserWriteContext) -> Self {
        Self { context }
    }

    pub async fn handle(&self, command: DeleteUserCommand) -> RepositoryResult<Option<User>> {
        let Some(user) = self.context.users.find_by_id(command.id).await? else {
            debug!(user_id = %command.id, "User not found for delete");
            return Ok(None);
        };

        self.context.users.delete(command.id).await?;
        self.context.events.publish(DomainEvent::deleted(user.clone()));
        Ok(Some(user))
    }
}
