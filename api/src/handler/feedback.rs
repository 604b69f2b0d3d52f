use axum::{extract::State, http::StatusCode, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::feedback::{
        CreateFeedbackRequest, CreateFeedbackRequestWithUsername, CreatedFeedbackResponse,
    },
};

pub async fn submit_feedback(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFeedbackRequest>,
) -> AppResult<(StatusCode, Json<CreatedFeedbackResponse>)> {
    // Submissions belong to student accounts; the admin identity has no
    // user row to own one.
    if user.session.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let event = CreateFeedbackRequestWithUsername::new(user.username().to_string(), req);
    let id = registry.feedback_repository().create(event.into()).await?;

    Ok((StatusCode::CREATED, Json(CreatedFeedbackResponse { id })))
}
