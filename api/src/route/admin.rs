use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    admin::{
        clear_logs, dashboard, delete_user, export_feedback, list_feedback, list_logs, list_users,
        rating_distribution,
    },
    guest::{assign_room, check_out, list_guest_stays, list_guests},
    hostel::{add_hostel, add_room, list_hostels, list_rooms},
};

pub fn build_admin_routers() -> Router<AppRegistry> {
    let admin_routers = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/feedback", get(list_feedback))
        .route("/feedback/export", get(export_feedback))
        .route("/feedback/ratings/:category", get(rating_distribution))
        .route("/users", get(list_users))
        .route("/users/:username", delete(delete_user))
        .route("/logs", get(list_logs))
        .route("/logs", delete(clear_logs))
        .route("/hostels", post(add_hostel))
        .route("/hostels", get(list_hostels))
        .route("/hostels/:hostel_id/rooms", post(add_room))
        .route("/hostels/:hostel_id/rooms", get(list_rooms))
        .route("/guests", get(list_guests))
        .route("/guests/:guest_id/stays", get(list_guest_stays))
        .route("/stays", post(assign_room))
        .route("/stays/checkout", post(check_out));

    Router::new().nest("/admin", admin_routers)
}
