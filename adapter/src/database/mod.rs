use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};

pub mod model;

fn make_sqlite_connect_options(cfg: &DatabaseConfig) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(&cfg.filename)
        .create_if_missing(true)
        .foreign_keys(true)
}

#[derive(Clone)]
pub struct ConnectionPool(SqlitePool);

impl ConnectionPool {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &SqlitePool {
        &self.0
    }

    pub async fn begin(&self) -> AppResult<sqlx::Transaction<'_, sqlx::Sqlite>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }

    /// Applies pending schema migrations. The embedded store is created on
    /// first connect, so this runs at every startup.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("../migrations").run(&self.0).await?;
        Ok(())
    }
}

pub fn connect_database_with(cfg: &DatabaseConfig) -> ConnectionPool {
    ConnectionPool(SqlitePool::connect_lazy_with(make_sqlite_connect_options(
        cfg,
    )))
}
