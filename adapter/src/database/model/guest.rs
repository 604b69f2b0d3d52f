use chrono::NaiveDate;
use kernel::model::{
    guest::{Guest, Stay},
    id::{GuestId, RoomId, StayId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct GuestRow {
    pub guest_id: GuestId,
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

impl From<GuestRow> for Guest {
    fn from(value: GuestRow) -> Self {
        let GuestRow {
            guest_id,
            user_id,
            name,
            email,
        } = value;
        Guest {
            id: guest_id,
            user_id,
            name,
            email,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct StayRow {
    pub stay_id: StayId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: Option<NaiveDate>,
}

impl From<StayRow> for Stay {
    fn from(value: StayRow) -> Self {
        let StayRow {
            stay_id,
            guest_id,
            room_id,
            check_in,
            check_out,
        } = value;
        Stay {
            id: stay_id,
            guest_id,
            room_id,
            check_in,
            check_out,
        }
    }
}
