use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{id::UserId, user::event::RegisterUser, user::User};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 8))]
    pub password: String,
    #[garde(length(min = 8))]
    pub confirm_password: String,
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub reg_no: String,
    #[garde(length(min = 1))]
    pub room_no: String,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(value: RegisterRequest) -> Self {
        let RegisterRequest {
            username,
            password,
            confirm_password: _,
            name,
            email,
            reg_no,
            room_no,
        } = value;
        Self {
            username,
            password,
            name,
            email,
            reg_no,
            room_no,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(value: Vec<User>) -> Self {
        Self {
            items: value.into_iter().map(UserResponse::from).collect(),
        }
    }
}

/// The password digest never leaves the adapter, so there is nothing to
/// exclude here by hand.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub reg_no: String,
    pub room_no: String,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            username,
            name,
            email,
            reg_no,
            room_no,
            last_login_at,
            created_at,
        } = value;
        Self {
            id,
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
