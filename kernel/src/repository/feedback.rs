use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    feedback::{
        event::CreateFeedback, DashboardSummary, Feedback, FeedbackCategory, FeedbackFilter,
        RatingCount,
    },
    list::{ListOptions, PaginatedList},
};

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, event: CreateFeedback) -> AppResult<i64>;
    async fn find_all(
        &self,
        filter: &FeedbackFilter,
        options: ListOptions,
    ) -> AppResult<PaginatedList<Feedback>>;
    /// The unpaginated filtered view, for export.
    async fn find_all_filtered(&self, filter: &FeedbackFilter) -> AppResult<Vec<Feedback>>;
    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Feedback>>;
    /// Submission count per grade for one rated category.
    async fn rating_distribution(&self, category: FeedbackCategory)
        -> AppResult<Vec<RatingCount>>;
    async fn summary(&self) -> AppResult<DashboardSummary>;
}
