use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::HostelId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedAdmin,
    model::hostel::{
        CreateHostelRequest, CreateRoomRequest, CreateRoomRequestWithHostelId, HostelResponse,
        HostelsResponse, RoomsResponse,
    },
};

pub async fn add_hostel(
    _admin: AuthorizedAdmin,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateHostelRequest>,
) -> AppResult<(StatusCode, Json<HostelResponse>)> {
    req.validate(&())?;

    let name = req.name.clone();
    let location = req.location.clone();
    let id = registry.hostel_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(HostelResponse { id, name, location }),
    ))
}

pub async fn list_hostels(
    _admin: AuthorizedAdmin,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HostelsResponse>> {
    registry
        .hostel_repository()
        .find_all()
        .await
        .map(HostelsResponse::from)
        .map(Json)
}

pub async fn add_room(
    _admin: AuthorizedAdmin,
    Path(hostel_id): Path<HostelId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let event = CreateRoomRequestWithHostelId::new(hostel_id, req);
    registry
        .hostel_repository()
        .create_room(event.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn list_rooms(
    _admin: AuthorizedAdmin,
    Path(hostel_id): Path<HostelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .hostel_repository()
        .find_rooms(hostel_id)
        .await
        .map(RoomsResponse::from)
        .map(Json)
}
