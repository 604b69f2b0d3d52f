use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::admin_log::{event::AppendAdminLog, AdminLog};
use kernel::repository::admin_log::AdminLogRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::admin_log::AdminLogRow, ConnectionPool};

#[derive(new)]
pub struct AdminLogRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AdminLogRepository for AdminLogRepositoryImpl {
    async fn append(&self, event: AppendAdminLog) -> AppResult<()> {
        sqlx::query("INSERT INTO admin_logs (logged_at, action, details) VALUES (?, ?, ?)")
            .bind(Utc::now())
            .bind(&event.action)
            .bind(&event.details)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<AdminLog>> {
        let rows: Vec<AdminLogRow> = sqlx::query_as(
            "SELECT id, logged_at, action, details FROM admin_logs \
             ORDER BY logged_at DESC, id DESC",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(AdminLog::from).collect())
    }

    async fn clear(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM admin_logs")
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn append_list_and_clear(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let repo = AdminLogRepositoryImpl::new(ConnectionPool::new(pool));

        repo.append(AppendAdminLog::new("ADMIN_LOGIN", "")).await?;
        repo.append(AppendAdminLog::new("USER_DELETION", "Deleted user: bob"))
            .await?;

        let logs = repo.find_all().await?;
        assert_eq!(logs.len(), 2);
        // newest first
        assert_eq!(logs[0].action, "USER_DELETION");
        assert_eq!(logs[0].details, "Deleted user: bob");

        repo.clear().await?;
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }
}
