use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::user::{
    event::{DeleteUser, RegisterUser},
    User,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the user row plus its linked guest row in one transaction.
    /// Fails without writing anything when the username is taken.
    async fn register(&self, event: RegisterUser) -> AppResult<User>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    /// Removes the user; feedback, the linked guest and its stays go with it.
    async fn delete(&self, event: DeleteUser) -> AppResult<()>;
}
