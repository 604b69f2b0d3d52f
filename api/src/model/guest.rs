use chrono::NaiveDate;
use kernel::model::{
    guest::{
        event::{AssignRoom, CheckOut},
        Guest, Stay,
    },
    id::{GuestId, RoomId, StayId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoomRequest {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
}

impl From<AssignRoomRequest> for AssignRoom {
    fn from(value: AssignRoomRequest) -> Self {
        let AssignRoomRequest {
            guest_id,
            room_id,
            check_in,
        } = value;
        Self {
            guest_id,
            room_id,
            check_in,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutRequest {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_out: NaiveDate,
}

impl From<CheckOutRequest> for CheckOut {
    fn from(value: CheckOutRequest) -> Self {
        let CheckOutRequest {
            guest_id,
            room_id,
            check_out,
        } = value;
        Self {
            guest_id,
            room_id,
            check_out,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayCreatedResponse {
    pub id: StayId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
    pub id: GuestId,
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

impl From<Guest> for GuestResponse {
    fn from(value: Guest) -> Self {
        let Guest {
            id,
            user_id,
            name,
            email,
        } = value;
        Self {
            id,
            user_id,
            name,
            email,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestsResponse {
    pub items: Vec<GuestResponse>,
}

impl From<Vec<Guest>> for GuestsResponse {
    fn from(value: Vec<Guest>) -> Self {
        Self {
            items: value.into_iter().map(GuestResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayResponse {
    pub id: StayId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: Option<NaiveDate>,
}

impl From<Stay> for StayResponse {
    fn from(value: Stay) -> Self {
        let Stay {
            id,
            guest_id,
            room_id,
            check_in,
            check_out,
        } = value;
        Self {
            id,
            guest_id,
            room_id,
            check_in,
            check_out,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaysResponse {
    pub items: Vec<StayResponse>,
}

impl From<Vec<Stay>> for StaysResponse {
    fn from(value: Vec<Stay>) -> Self {
        Self {
            items: value.into_iter().map(StayResponse::from).collect(),
        }
    }
}
