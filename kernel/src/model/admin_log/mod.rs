use chrono::{DateTime, Utc};

pub mod event;

/// One append-only audit trail entry for an administrator-triggered action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLog {
    pub id: i64,
    pub logged_at: DateTime<Utc>,
    pub action: String,
    pub details: String,
}
