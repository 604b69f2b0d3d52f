use crate::model::id::{HostelId, RoomId};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostel {
    pub id: HostelId,
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub hostel_id: HostelId,
    pub room_no: String,
    pub room_type: String,
}
