use chrono::{DateTime, Utc};
use kernel::model::{id::UserId, user::User};

/// Listing row; the password digest is never selected into it.
#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub reg_no: String,
    pub room_no: String,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            username,
            name,
            email,
            reg_no,
            room_no,
            last_login_at,
            created_at,
        } = value;
        User {
            id: user_id,
            username,
            name,
            email,
            reg_no,
            room_no,
            last_login_at,
            created_at,
        }
    }
}

/// Credential lookup row used only by authentication.
#[derive(sqlx::FromRow)]
pub struct CredentialRow {
    pub username: String,
    pub password_hash: String,
}
