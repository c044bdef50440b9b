use chrono::{DateTime, Utc};
use kernel::model::reservation::Reservation;
use shared::error::AppError;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub id: Uuid,
    pub book_id: Uuid,
    pub member_id: Uuid,
    pub reserved_at: DateTime<Utc>,
    pub status: String,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        Ok(Reservation {
            id: row.id.into(),
            book_id: row.book_id.into(),
            member_id: row.member_id.into(),
            reserved_at: row.reserved_at,
            status: row.status.parse()?,
        })
    }
}
