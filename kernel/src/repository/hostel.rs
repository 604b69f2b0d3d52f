use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    hostel::{
        event::{CreateHostel, CreateRoom},
        Hostel, Room,
    },
    id::{HostelId, RoomId},
};

#[async_trait]
pub trait HostelRepository: Send + Sync {
    async fn create(&self, event: CreateHostel) -> AppResult<HostelId>;
    async fn find_all(&self) -> AppResult<Vec<Hostel>>;
    async fn create_room(&self, event: CreateRoom) -> AppResult<RoomId>;
    async fn find_rooms(&self, hostel_id: HostelId) -> AppResult<Vec<Room>>;
}
