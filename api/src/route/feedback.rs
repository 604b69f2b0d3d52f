use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::feedback::submit_feedback;

pub fn build_feedback_routers() -> Router<AppRegistry> {
    Router::new().route("/feedback", post(submit_feedback))
}
