use std::str::FromStr;

use kernel::model::{auth::Session, role::Role};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct SessionRow {
    pub username: String,
    pub role: String,
}

impl TryFrom<SessionRow> for Session {
    type Error = AppError;

    fn try_from(value: SessionRow) -> Result<Self, Self::Error> {
        let SessionRow { username, role } = value;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("unknown role: {role}")))?;
        Ok(Session {
            identity: username,
            role,
        })
    }
}
