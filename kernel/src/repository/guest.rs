use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    guest::{
        event::{AssignRoom, CheckOut},
        Guest, Stay,
    },
    id::{GuestId, StayId},
};

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Guest>>;
    async fn find_stays(&self, guest_id: GuestId) -> AppResult<Vec<Stay>>;
    /// Opens a stay from the check-in date. Whether the guest already has an
    /// open stay elsewhere is not checked; only foreign keys gate the insert.
    async fn assign_room(&self, event: AssignRoom) -> AppResult<StayId>;
    /// Closes the open stay for the guest/room pair. Closed stays are never
    /// reopened.
    async fn check_out(&self, event: CheckOut) -> AppResult<()>;
}
