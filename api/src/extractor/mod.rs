use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeader,
};
use kernel::model::auth::{AccessToken, Session};
use registry::AppRegistry;
use shared::error::AppError;

/// Resolves the bearer token into the caller's session. Handlers receive the
/// session as an explicit value; there is no ambient login state.
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub session: Session,
}

impl AuthorizedUser {
    pub fn username(&self) -> &str {
        &self.session.identity
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::UnauthenticatedError)?;

        let access_token = AccessToken(bearer.token().to_string());
        let session = registry
            .auth_repository()
            .fetch_session(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self {
            access_token,
            session,
        })
    }
}

/// Admin-gated variant; anything less than an admin session is rejected
/// before a handler runs, so admin operations fail closed.
pub struct AuthorizedAdmin(pub AuthorizedUser);

impl AuthorizedAdmin {
    pub fn username(&self) -> &str {
        self.0.username()
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthorizedUser::from_request_parts(parts, registry).await?;
        if !user.session.is_admin() {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(Self(user))
    }
}
