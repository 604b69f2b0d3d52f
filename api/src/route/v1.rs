use super::{
    admin::build_admin_routers, auth::build_auth_routers, feedback::build_feedback_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_auth_routers())
        .merge(build_feedback_routers())
        .merge(build_admin_routers());
    Router::new().nest("/api/v1", router)
}
