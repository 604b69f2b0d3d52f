use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::auth::{
    event::{AdminLogin, StudentLogin},
    AccessToken, Session,
};

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Verifies a student credential pair against the users table. Success
    /// stamps the user's last login; any mismatch is reported uniformly.
    async fn login_student(&self, event: StudentLogin) -> AppResult<AccessToken>;
    /// Verifies the out-of-band admin credential pair. Admin identities are
    /// never row-based.
    async fn login_admin(&self, event: AdminLogin) -> AppResult<AccessToken>;
    async fn fetch_session(&self, access_token: &AccessToken) -> AppResult<Option<Session>>;
    async fn delete_session(&self, access_token: &AccessToken) -> AppResult<()>;
}
