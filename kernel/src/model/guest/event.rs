use chrono::NaiveDate;
use derive_new::new;

use crate::model::id::{GuestId, RoomId};

#[derive(Debug, new)]
pub struct AssignRoom {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
}

#[derive(Debug, new)]
pub struct CheckOut {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_out: NaiveDate,
}
