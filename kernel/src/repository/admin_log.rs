use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::admin_log::{event::AppendAdminLog, AdminLog};

#[async_trait]
pub trait AdminLogRepository: Send + Sync {
    async fn append(&self, event: AppendAdminLog) -> AppResult<()>;
    async fn find_all(&self) -> AppResult<Vec<AdminLog>>;
    async fn clear(&self) -> AppResult<()>;
}
