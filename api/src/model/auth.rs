use garde::Validate;
use kernel::model::auth::{
    event::{AdminLogin, StudentLogin},
    AccessToken,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub password: String,
}

impl From<LoginRequest> for StudentLogin {
    fn from(value: LoginRequest) -> Self {
        let LoginRequest { username, password } = value;
        Self { username, password }
    }
}

impl From<LoginRequest> for AdminLogin {
    fn from(value: LoginRequest) -> Self {
        let LoginRequest { username, password } = value;
        Self { username, password }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

impl From<AccessToken> for AccessTokenResponse {
    fn from(value: AccessToken) -> Self {
        Self {
            access_token: value.0,
        }
    }
}
