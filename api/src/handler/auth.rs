use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::admin_log::event::AppendAdminLog;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        auth::{AccessTokenResponse, LoginRequest},
        user::{RegisterRequest, UserResponse},
    },
};

pub async fn register(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    req.validate(&())?;
    if req.password != req.confirm_password {
        return Err(AppError::UnprocessableEntity("passwords do not match".into()));
    }

    registry
        .user_repository()
        .register(req.into())
        .await
        .map(|user| (StatusCode::CREATED, Json(user.into())))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate(&())?;

    registry
        .auth_repository()
        .login_student(req.into())
        .await
        .map(AccessTokenResponse::from)
        .map(Json)
}

pub async fn admin_login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate(&())?;

    let access_token = registry.auth_repository().login_admin(req.into()).await?;
    registry
        .admin_log_repository()
        .append(AppendAdminLog::new("ADMIN_LOGIN", ""))
        .await?;

    Ok(Json(access_token.into()))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let was_admin = user.session.is_admin();
    registry
        .auth_repository()
        .delete_session(&user.access_token)
        .await?;
    if was_admin {
        registry
            .admin_log_repository()
            .append(AppendAdminLog::new("ADMIN_LOGOUT", ""))
            .await?;
    }

    Ok(StatusCode::NO_CONTENT)
}
