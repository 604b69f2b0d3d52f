use derive_new::new;
use garde::Validate;
use kernel::model::{
    hostel::{
        event::{CreateHostel, CreateRoom},
        Hostel, Room,
    },
    id::{HostelId, RoomId},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostelRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub location: String,
}

impl From<CreateHostelRequest> for CreateHostel {
    fn from(value: CreateHostelRequest) -> Self {
        let CreateHostelRequest { name, location } = value;
        Self { name, location }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[garde(length(min = 1))]
    pub room_no: String,
    #[garde(length(min = 1))]
    pub room_type: String,
}

#[derive(new)]
pub struct CreateRoomRequestWithHostelId(HostelId, CreateRoomRequest);

impl From<CreateRoomRequestWithHostelId> for CreateRoom {
    fn from(value: CreateRoomRequestWithHostelId) -> Self {
        let CreateRoomRequestWithHostelId(hostel_id, CreateRoomRequest { room_no, room_type }) =
            value;
        Self {
            hostel_id,
            room_no,
            room_type,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelResponse {
    pub id: HostelId,
    pub name: String,
    pub location: String,
}

impl From<Hostel> for HostelResponse {
    fn from(value: Hostel) -> Self {
        let Hostel { id, name, location } = value;
        Self { id, name, location }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelsResponse {
    pub items: Vec<HostelResponse>,
}

impl From<Vec<Hostel>> for HostelsResponse {
    fn from(value: Vec<Hostel>) -> Self {
        Self {
            items: value.into_iter().map(HostelResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub hostel_id: HostelId,
    pub room_no: String,
    pub room_type: String,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            hostel_id,
            room_no,
            room_type,
        } = value;
        Self {
            id,
            hostel_id,
            room_no,
            room_type,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}
