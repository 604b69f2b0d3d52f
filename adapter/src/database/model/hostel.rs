use kernel::model::{
    hostel::{Hostel, Room},
    id::{HostelId, RoomId},
};

#[derive(sqlx::FromRow)]
pub struct HostelRow {
    pub hostel_id: HostelId,
    pub name: String,
    pub location: String,
}

impl From<HostelRow> for Hostel {
    fn from(value: HostelRow) -> Self {
        let HostelRow {
            hostel_id,
            name,
            location,
        } = value;
        Hostel {
            id: hostel_id,
            name,
            location,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub hostel_id: HostelId,
    pub room_no: String,
    pub room_type: String,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            hostel_id,
            room_no,
            room_type,
        } = value;
        Room {
            id: room_id,
            hostel_id,
            room_no,
            room_type,
        }
    }
}
