use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use kernel::model::{
    admin_log::event::AppendAdminLog, feedback::FeedbackCategory, user::event::DeleteUser,
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedAdmin,
    model::{
        admin::{
            AdminLogsResponse, DashboardResponse, FeedbackListQuery, RatingDistributionResponse,
        },
        export::render_feedback_csv,
        feedback::PaginatedFeedbackResponse,
        user::UsersResponse,
    },
};

pub async fn dashboard(
    _admin: AuthorizedAdmin,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DashboardResponse>> {
    let summary = registry.feedback_repository().summary().await?;
    let recent = registry.feedback_repository().find_recent(5).await?;
    registry
        .admin_log_repository()
        .append(AppendAdminLog::new("REPORT_VIEW", "Dashboard"))
        .await?;

    Ok(Json(DashboardResponse::compose(summary, recent)))
}

pub async fn list_feedback(
    _admin: AuthorizedAdmin,
    Query(query): Query<FeedbackListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedFeedbackResponse>> {
    let (filter, options) = query.into_parts();

    registry
        .feedback_repository()
        .find_all(&filter, options)
        .await
        .map(PaginatedFeedbackResponse::from)
        .map(Json)
}

pub async fn export_feedback(
    _admin: AuthorizedAdmin,
    Query(query): Query<FeedbackListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    let filter = query.into_filter();
    let rows = registry
        .feedback_repository()
        .find_all_filtered(&filter)
        .await?;
    let body = render_feedback_csv(&rows)?;
    registry
        .admin_log_repository()
        .append(AppendAdminLog::new(
            "REPORT_EXPORT",
            format!("{} rows", rows.len()),
        ))
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"hostel_feedback.csv\"",
            ),
        ],
        body,
    ))
}

pub async fn rating_distribution(
    _admin: AuthorizedAdmin,
    Path(category): Path<FeedbackCategory>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RatingDistributionResponse>> {
    registry
        .feedback_repository()
        .rating_distribution(category)
        .await
        .map(|counts| RatingDistributionResponse::compose(category, counts))
        .map(Json)
}

pub async fn list_users(
    _admin: AuthorizedAdmin,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    registry
        .user_repository()
        .find_all()
        .await
        .map(UsersResponse::from)
        .map(Json)
}

pub async fn delete_user(
    _admin: AuthorizedAdmin,
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .user_repository()
        .delete(DeleteUser {
            username: username.clone(),
        })
        .await?;
    registry
        .admin_log_repository()
        .append(AppendAdminLog::new(
            "USER_DELETION",
            format!("Deleted user: {username}"),
        ))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_logs(
    _admin: AuthorizedAdmin,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AdminLogsResponse>> {
    registry
        .admin_log_repository()
        .find_all()
        .await
        .map(AdminLogsResponse::from)
        .map(Json)
}

pub async fn clear_logs(
    _admin: AuthorizedAdmin,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry.admin_log_repository().clear().await?;
    // the fresh log records who emptied it
    registry
        .admin_log_repository()
        .append(AppendAdminLog::new("LOGS_CLEARED", ""))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
