use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::GuestId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedAdmin,
    model::guest::{
        AssignRoomRequest, CheckOutRequest, GuestsResponse, StayCreatedResponse, StaysResponse,
    },
};

pub async fn list_guests(
    _admin: AuthorizedAdmin,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GuestsResponse>> {
    registry
        .guest_repository()
        .find_all()
        .await
        .map(GuestsResponse::from)
        .map(Json)
}

pub async fn list_guest_stays(
    _admin: AuthorizedAdmin,
    Path(guest_id): Path<GuestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StaysResponse>> {
    registry
        .guest_repository()
        .find_stays(guest_id)
        .await
        .map(StaysResponse::from)
        .map(Json)
}

pub async fn assign_room(
    _admin: AuthorizedAdmin,
    State(registry): State<AppRegistry>,
    Json(req): Json<AssignRoomRequest>,
) -> AppResult<(StatusCode, Json<StayCreatedResponse>)> {
    registry
        .guest_repository()
        .assign_room(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(StayCreatedResponse { id })))
}

pub async fn check_out(
    _admin: AuthorizedAdmin,
    State(registry): State<AppRegistry>,
    Json(req): Json<CheckOutRequest>,
) -> AppResult<StatusCode> {
    registry
        .guest_repository()
        .check_out(req.into())
        .await
        .map(|_| StatusCode::OK)
}
