use chrono::NaiveDate;

use crate::model::id::{GuestId, RoomId, StayId, UserId};

pub mod event;

/// A person occupying rooms, linked to the authentication-level user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: GuestId,
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

/// A guest's time-bounded occupancy of a room. An open stay has no
/// check-out date; once set, the date is never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    pub id: StayId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: Option<NaiveDate>,
}
