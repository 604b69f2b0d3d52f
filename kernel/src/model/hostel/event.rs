use crate::model::id::HostelId;

#[derive(Debug)]
pub struct CreateHostel {
    pub name: String,
    pub location: String,
}

#[derive(Debug)]
pub struct CreateRoom {
    pub hostel_id: HostelId,
    pub room_no: String,
    pub room_type: String,
}
