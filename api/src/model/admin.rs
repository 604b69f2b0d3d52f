use chrono::{DateTime, Utc};
use kernel::model::{
    admin_log::AdminLog,
    feedback::{
        DashboardSummary, Feedback, FeedbackCategory, FeedbackFilter, MessType, RatingCount,
        RatingGrade,
    },
    list::ListOptions,
};
use serde::{Deserialize, Serialize};

use crate::model::feedback::FeedbackResponse;

const DEFAULT_PAGE_SIZE: i64 = 20;

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackListQuery {
    #[serde(default)]
    pub submitted_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub hostel_rating: Option<RatingGrade>,
    #[serde(default)]
    pub mess_rating: Option<RatingGrade>,
    #[serde(default)]
    pub bathroom_rating: Option<RatingGrade>,
    #[serde(default)]
    pub mess_type: Option<MessType>,
    #[serde(default)]
    pub contains: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

impl FeedbackListQuery {
    pub fn into_parts(self) -> (FeedbackFilter, ListOptions) {
        let FeedbackListQuery {
            submitted_from,
            submitted_to,
            username,
            hostel_rating,
            mess_rating,
            bathroom_rating,
            mess_type,
            contains,
            limit,
            offset,
        } = self;
        (
            FeedbackFilter {
                submitted_from,
                submitted_to,
                username,
                hostel_rating,
                mess_rating,
                bathroom_rating,
                mess_type,
                contains,
            },
            ListOptions { limit, offset },
        )
    }

    pub fn into_filter(self) -> FeedbackFilter {
        self.into_parts().0
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_users: i64,
    pub total_feedback: i64,
    pub users_last_week: i64,
    pub feedback_last_week: i64,
    pub recent_feedback: Vec<FeedbackResponse>,
}

impl DashboardResponse {
    pub fn compose(summary: DashboardSummary, recent: Vec<Feedback>) -> Self {
        let DashboardSummary {
            total_users,
            total_feedback,
            users_last_week,
            feedback_last_week,
        } = summary;
        Self {
            total_users,
            total_feedback,
            users_last_week,
            feedback_last_week,
            recent_feedback: recent.into_iter().map(FeedbackResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingCountResponse {
    pub grade: RatingGrade,
    pub count: i64,
}

impl From<RatingCount> for RatingCountResponse {
    fn from(value: RatingCount) -> Self {
        let RatingCount { grade, count } = value;
        Self { grade, count }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDistributionResponse {
    pub category: FeedbackCategory,
    pub items: Vec<RatingCountResponse>,
}

impl RatingDistributionResponse {
    pub fn compose(category: FeedbackCategory, counts: Vec<RatingCount>) -> Self {
        Self {
            category,
            items: counts.into_iter().map(RatingCountResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLogsResponse {
    pub items: Vec<AdminLogResponse>,
}

impl From<Vec<AdminLog>> for AdminLogsResponse {
    fn from(value: Vec<AdminLog>) -> Self {
        Self {
            items: value.into_iter().map(AdminLogResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLogResponse {
    pub id: i64,
    pub logged_at: DateTime<Utc>,
    pub action: String,
    pub details: String,
}

impl From<AdminLog> for AdminLogResponse {
    fn from(value: AdminLog) -> Self {
        let AdminLog {
            id,
            logged_at,
            action,
            details,
        } = value;
        Self {
            id,
            logged_at,
            action,
            details,
        }
    }
}
