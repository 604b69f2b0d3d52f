use chrono::{DateTime, Utc};
use kernel::model::admin_log::AdminLog;

#[derive(sqlx::FromRow)]
pub struct AdminLogRow {
    pub id: i64,
    pub logged_at: DateTime<Utc>,
    pub action: String,
    pub details: String,
}

impl From<AdminLogRow> for AdminLog {
    fn from(value: AdminLogRow) -> Self {
        let AdminLogRow {
            id,
            logged_at,
            action,
            details,
        } = value;
        AdminLog {
            id,
            logged_at,
            action,
            details,
        }
    }
}
