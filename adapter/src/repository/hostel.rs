use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hostel::{
        event::{CreateHostel, CreateRoom},
        Hostel, Room,
    },
    id::{HostelId, RoomId},
};
use kernel::repository::hostel::HostelRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::hostel::{HostelRow, RoomRow},
    ConnectionPool,
};

#[derive(new)]
pub struct HostelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HostelRepository for HostelRepositoryImpl {
    async fn create(&self, event: CreateHostel) -> AppResult<HostelId> {
        let hostel_id = HostelId::new();
        sqlx::query("INSERT INTO hostels (hostel_id, name, location) VALUES (?, ?, ?)")
            .bind(hostel_id)
            .bind(&event.name)
            .bind(&event.location)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(hostel_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Hostel>> {
        let rows: Vec<HostelRow> =
            sqlx::query_as("SELECT hostel_id, name, location FROM hostels ORDER BY name")
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Hostel::from).collect())
    }

    async fn create_room(&self, event: CreateRoom) -> AppResult<RoomId> {
        let mut tx = self.db.begin().await?;

        let hostel: Option<HostelId> =
            sqlx::query_scalar("SELECT hostel_id FROM hostels WHERE hostel_id = ?")
                .bind(event.hostel_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if hostel.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "hostel {} not found",
                event.hostel_id
            )));
        }

        let room_id = RoomId::new();
        sqlx::query(
            "INSERT INTO rooms (room_id, hostel_id, room_no, room_type) VALUES (?, ?, ?, ?)",
        )
        .bind(room_id)
        .bind(event.hostel_id)
        .bind(&event.room_no)
        .bind(&event.room_type)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(room_id)
    }

    async fn find_rooms(&self, hostel_id: HostelId) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = sqlx::query_as(
            "SELECT room_id, hostel_id, room_no, room_type FROM rooms \
             WHERE hostel_id = ? ORDER BY room_no",
        )
        .bind(hostel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn create_hostels_and_rooms(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let repo = HostelRepositoryImpl::new(ConnectionPool::new(pool));

        let hostel_id = repo
            .create(CreateHostel {
                name: "North Block".into(),
                location: "Campus North".into(),
            })
            .await?;

        let hostels = repo.find_all().await?;
        assert_eq!(hostels.len(), 1);
        assert_eq!(hostels[0].name, "North Block");

        repo.create_room(CreateRoom {
            hostel_id,
            room_no: "102".into(),
            room_type: "Single".into(),
        })
        .await?;
        repo.create_room(CreateRoom {
            hostel_id,
            room_no: "101".into(),
            room_type: "Double".into(),
        })
        .await?;

        let rooms = repo.find_rooms(hostel_id).await?;
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].room_no, "101");
        assert_eq!(rooms[1].room_no, "102");
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn room_needs_an_existing_hostel(pool: sqlx::SqlitePool) {
        let repo = HostelRepositoryImpl::new(ConnectionPool::new(pool));
        let err = repo
            .create_room(CreateRoom {
                hostel_id: HostelId::new(),
                room_no: "101".into(),
                room_type: "Single".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }
}
