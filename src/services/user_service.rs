//! User service layer.

use crate::commands::{CreateUserCommand, DeleteUserCommand, PatchUserCommand, UpdateUserCommand};
use crate::domain::User;
use crate::error::CoreResult;
use crate::handlers::{
    CreateUserHandler, DeleteUserHandler, GetUserHandler, ListUsersHandler, PatchUserHandler,
    UpdateUserHandler, UserWriteContext,
};
use crate::models::{Page, UserReadModel};
use crate::queries::{GetUserQuery, ListUsersQuery};
use crate::repositories::UserReadRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Write operations on users. Password hashes arrive already hashed.
#[async_trait]
pub trait UserCommandService: Send + Sync {
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> CoreResult<User>;

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> CoreResult<Option<User>>;

    async fn patch(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> CoreResult<Option<User>>;

    async fn delete(&self, id: i64) -> CoreResult<Option<User>>;
}

/// Read operations on users.
#[async_trait]
pub trait UserQueryService: Send + Sync {
    async fn get_by_id(&self, id: i64) -> CoreResult<Option<UserReadModel>>;

    async fn list(&self, limit: Option<usize>, offset: usize) -> CoreResult<Page<UserReadModel>>;
}

/// Default implementation of UserCommandService.
pub struct UserCommandServiceImpl {
    create_handler: CreateUserHandler,
    update_handler: UpdateUserHandler,
    patch_handler: PatchUserHandler,
    delete_handler: DeleteUserHandler,
}

impl UserCommandServiceImpl {
    pub fn new(context: UserWriteContext) -> Self {
        Self {
            create_handler: CreateUserHandler::new(context.clone()),
            update_handler: UpdateUserHandler::new(context.clone()),
            patch_handler: PatchUserHandler::new(context.clone()),
            delete_handler: DeleteUserHandler::new(context),
        }
    }
}

#[async_trait]
impl UserCommandService for UserCommandServiceImpl {
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> CoreResult<User> {
        let command = CreateUserCommand::parse(name, email, password_hash)?;
        Ok(self.create_handler.handle(command).await?)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> CoreResult<Option<User>> {
        let command = UpdateUserCommand::parse(id, name, email, password_hash)?;
        Ok(self.update_handler.handle(command).await?)
    }

    async fn patch(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> CoreResult<Option<User>> {
        let command = PatchUserCommand::parse(id, name, email, password_hash)?;
        Ok(self.patch_handler.handle(command).await?)
    }

    async fn delete(&self, id: i64) -> CoreResult<Option<User>> {
        let command = DeleteUserCommand::parse(id)?;
        Ok(self.delete_handler.handle(command).await?)
    }
}

/// Default implementation of UserQueryService.
pub struct UserQueryServiceImpl {
    get_handler: GetUserHandler,
    list_handler: ListUsersHandler,
    default_page_size: usize,
}

impl UserQueryServiceImpl {
    pub fn new(
        users: Arc<dyn UserReadRepository>,
        default_page_size: usize,
        max_page_size: usize,
    ) -> Self {
        Self {
            get_handler: GetUserHandler::new(users.clone()),
            list_handler: ListUsersHandler::new(users, max_page_size),
            default_page_size,
        }
    }
}

#[async_trait]
impl UserQueryService for UserQueryServiceImpl {
    async fn get_by_id(&self, id: i64) -> CoreResult<Option<UserReadModel>> {
        let query = GetUserQuery::parse(id)?;
        Ok(self.get_handler.handle(query).await?)
    }

    async fn list(&self, limit: Option<usize>, offset: usize) -> CoreResult<Page<UserReadModel>> {
        let query = ListUsersQuery {
            limit: limit.unwrap_or(self.default_page_size),
            offset,
        };
        Ok(self.list_handler.handle(query).await?)
    }
}
