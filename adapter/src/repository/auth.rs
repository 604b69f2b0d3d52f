use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    auth::{
        event::{AdminLogin, StudentLogin},
        AccessToken, Session,
    },
    role::Role,
};
use kernel::repository::auth::AuthRepository;
use shared::{
    config::AdminConfig,
    error::{AppError, AppResult},
};
use uuid::Uuid;

use crate::database::{
    model::{auth::SessionRow, user::CredentialRow},
    ConnectionPool,
};

// Well-formed argon2id reference hash that matches no password. Verified
// against when the username lookup misses, so the unknown-user and
// wrong-password paths cost the same and stay indistinguishable.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$zdG2yYV5hefG8uNoQ9rGkpOXN1dQYMpEGxMVmLgnMGI";

pub(crate) fn hash_password(raw: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(raw.as_bytes(), &salt)?
        .to_string())
}

fn verify_password(raw: &str, hash: &str) -> AppResult<()> {
    let parsed = PasswordHash::new(hash)?;
    Argon2::default()
        .verify_password(raw.as_bytes(), &parsed)
        .map_err(|_| AppError::InvalidCredentials)
}

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    admin: AdminConfig,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn login_student(&self, event: StudentLogin) -> AppResult<AccessToken> {
        let mut tx = self.db.begin().await?;

        let row: Option<CredentialRow> =
            sqlx::query_as("SELECT username, password_hash FROM users WHERE username = ?")
                .bind(&event.username)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            let _ = verify_password(&event.password, DUMMY_PASSWORD_HASH);
            return Err(AppError::InvalidCredentials);
        };
        verify_password(&event.password, &row.password_hash)?;

        let res = sqlx::query("UPDATE users SET last_login_at = ? WHERE username = ?")
            .bind(Utc::now())
            .bind(&row.username)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no user row has been stamped on login".into(),
            ));
        }

        let access_token = AccessToken(Uuid::new_v4().simple().to_string());
        sqlx::query("INSERT INTO sessions (access_token, username, role) VALUES (?, ?, ?)")
            .bind(&access_token.0)
            .bind(&row.username)
            .bind(Role::Student.as_ref())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(access_token)
    }

    async fn login_admin(&self, event: AdminLogin) -> AppResult<AccessToken> {
        if event.username != self.admin.username {
            let _ = verify_password(&event.password, DUMMY_PASSWORD_HASH);
            return Err(AppError::InvalidCredentials);
        }
        verify_password(&event.password, &self.admin.password_hash)?;

        let access_token = AccessToken(Uuid::new_v4().simple().to_string());
        sqlx::query("INSERT INTO sessions (access_token, username, role) VALUES (?, ?, ?)")
            .bind(&access_token.0)
            .bind(&self.admin.username)
            .bind(Role::Admin.as_ref())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(access_token)
    }

    async fn fetch_session(&self, access_token: &AccessToken) -> AppResult<Option<Session>> {
        let row: Option<SessionRow> =
            sqlx::query_as("SELECT username, role FROM sessions WHERE access_token = ?")
                .bind(&access_token.0)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        row.map(Session::try_from).transpose()
    }

    async fn delete_session(&self, access_token: &AccessToken) -> AppResult<()> {
        sqlx::query("DELETE FROM sessions WHERE access_token = ?")
            .bind(&access_token.0)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::{
        model::user::event::RegisterUser,
        repository::user::UserRepository,
    };

    fn admin_config() -> AdminConfig {
        AdminConfig {
            username: "hostel_admin".into(),
            password_hash: hash_password("SecureAdminPass123!").unwrap(),
        }
    }

    fn alice() -> RegisterUser {
        RegisterUser {
            username: "alice".into(),
            password: "correct horse battery".into(),
            name: "Alice Kumar".into(),
            email: "alice@college.edu".into(),
            reg_no: "21BCE1001".into(),
            room_no: "A-214".into(),
        }
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn student_login_round_trip(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let users = UserRepositoryImpl::new(db.clone());
        users.register(alice()).await?;

        let repo = AuthRepositoryImpl::new(db.clone(), admin_config());
        let before = Utc::now();
        let token = repo
            .login_student(StudentLogin {
                username: "alice".into(),
                password: "correct horse battery".into(),
            })
            .await?;

        let session = repo.fetch_session(&token).await?.unwrap();
        assert_eq!(session.identity, "alice");
        assert_eq!(session.role, Role::Student);
        assert!(!session.is_admin());

        let user = users.find_by_username("alice").await?.unwrap();
        assert!(user.last_login_at.unwrap() >= before);

        repo.delete_session(&token).await?;
        assert!(repo.fetch_session(&token).await?.is_none());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn login_failures_are_uniform(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        UserRepositoryImpl::new(db.clone()).register(alice()).await?;

        let repo = AuthRepositoryImpl::new(db, admin_config());
        let wrong_password = repo
            .login_student(StudentLogin {
                username: "alice".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        let unknown_user = repo
            .login_student(StudentLogin {
                username: "mallory".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_user, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn admin_login_checks_configured_pair(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let repo = AuthRepositoryImpl::new(ConnectionPool::new(pool), admin_config());

        let token = repo
            .login_admin(AdminLogin {
                username: "hostel_admin".into(),
                password: "SecureAdminPass123!".into(),
            })
            .await?;
        let session = repo.fetch_session(&token).await?.unwrap();
        assert_eq!(session.role, Role::Admin);
        assert!(session.is_admin());

        let bad = repo
            .login_admin(AdminLogin {
                username: "hostel_admin".into(),
                password: "guess".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(bad, AppError::InvalidCredentials));
        Ok(())
    }
}
