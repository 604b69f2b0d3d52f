use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    guest::{
        event::{AssignRoom, CheckOut},
        Guest, Stay,
    },
    id::{GuestId, RoomId, StayId},
};
use kernel::repository::guest::GuestRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::guest::{GuestRow, StayRow},
    ConnectionPool,
};

#[derive(new)]
pub struct GuestRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GuestRepository for GuestRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Guest>> {
        let rows: Vec<GuestRow> =
            sqlx::query_as("SELECT guest_id, user_id, name, email FROM guests ORDER BY name")
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Guest::from).collect())
    }

    async fn find_stays(&self, guest_id: GuestId) -> AppResult<Vec<Stay>> {
        let rows: Vec<StayRow> = sqlx::query_as(
            "SELECT stay_id, guest_id, room_id, check_in, check_out FROM stays \
             WHERE guest_id = ? ORDER BY check_in",
        )
        .bind(guest_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Stay::from).collect())
    }

    async fn assign_room(&self, event: AssignRoom) -> AppResult<StayId> {
        let mut tx = self.db.begin().await?;

        let guest: Option<GuestId> =
            sqlx::query_scalar("SELECT guest_id FROM guests WHERE guest_id = ?")
                .bind(event.guest_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if guest.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "guest {} not found",
                event.guest_id
            )));
        }

        let room: Option<RoomId> = sqlx::query_scalar("SELECT room_id FROM rooms WHERE room_id = ?")
            .bind(event.room_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if room.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "room {} not found",
                event.room_id
            )));
        }

        // A guest already checked in elsewhere may be assigned again; only
        // referential validity gates the insert.
        let stay_id = StayId::new();
        sqlx::query("INSERT INTO stays (stay_id, guest_id, room_id, check_in) VALUES (?, ?, ?, ?)")
            .bind(stay_id)
            .bind(event.guest_id)
            .bind(event.room_id)
            .bind(event.check_in)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(stay_id)
    }

    async fn check_out(&self, event: CheckOut) -> AppResult<()> {
        let res = sqlx::query(
            "UPDATE stays SET check_out = ? \
             WHERE guest_id = ? AND room_id = ? AND check_out IS NULL",
        )
        .bind(event.check_out)
        .bind(event.guest_id)
        .bind(event.room_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "no open stay for this guest and room".into(),
            ));
        }

        Ok(())
    }
}
