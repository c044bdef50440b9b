use chrono::{DateTime, Utc};
use kernel::model::fine::Fine;
use shared::error::AppError;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct FineRow {
    pub id: Uuid,
    pub member_id: Uuid,
    pub loan_id: Uuid,
    pub amount: f64,
    pub paid_at: Option<DateTime<Utc>>,
}

impl TryFrom<FineRow> for Fine {
    type Error = AppError;

    fn try_from(row: FineRow) -> Result<Self, Self::Error> {
        Ok(Fine {
            id: row.id.into(),
            member_id: row.member_id.into(),
            loan_id: row.loan_id.into(),
            amount: row.amount,
            paid_at: row.paid_at,
        })
    }
}
