use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::{GuestId, UserId},
    user::{
        event::{DeleteUser, RegisterUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::user::UserRow, ConnectionPool},
    repository::auth::hash_password,
};

const USER_COLUMNS: &str =
    "user_id, username, name, email, reg_no, room_no, last_login_at, created_at";

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn register(&self, event: RegisterUser) -> AppResult<User> {
        let RegisterUser {
            username,
            password,
            name,
            email,
            reg_no,
            room_no,
        } = event;

        let mut tx = self.db.begin().await?;

        let taken: Option<String> =
            sqlx::query_scalar("SELECT username FROM users WHERE username = ?")
                .bind(&username)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if taken.is_some() {
            return Err(AppError::UnprocessableEntity(
                "username already exists".into(),
            ));
        }

        let user_id = UserId::new();
        let created_at = Utc::now();
        let password_hash = hash_password(&password)?;
        let res = sqlx::query(
            r#"
                INSERT INTO users
                (user_id, username, password_hash, name, email, reg_no, room_no, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(&username)
        .bind(&password_hash)
        .bind(&name)
        .bind(&email)
        .bind(&reg_no)
        .bind(&room_no)
        .bind(created_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no user record has been created".into(),
            ));
        }

        // The guest record rides in the same transaction so a registration
        // is either fully visible or not at all.
        sqlx::query("INSERT INTO guests (guest_id, user_id, name, email) VALUES (?, ?, ?, ?)")
            .bind(GuestId::new())
            .bind(user_id)
            .bind(&name)
            .bind(&email)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(User {
            id: user_id,
            username,
            name,
            email,
            reg_no,
            room_no,
            last_login_at: None,
            created_at,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC");
        let rows: Vec<UserRow> = sqlx::query_as(&sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(username)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let res = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(&event.username)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "user \"{}\" not found",
                event.username
            )));
        }

        // Feedback, guest and stay rows cascade; live sessions for the
        // deleted account are revoked here.
        sqlx::query("DELETE FROM sessions WHERE username = ? AND role = 'Student'")
            .bind(&event.username)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}
