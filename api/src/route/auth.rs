use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::auth::{admin_login, login, logout, register};

pub fn build_auth_routers() -> Router<AppRegistry> {
    let auth_routers = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/admin/login", post(admin_login));

    Router::new().nest("/auth", auth_routers)
}
