use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::id::{BookId, MemberId, ReservationId};

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub reserved_at: DateTime<Utc>,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Active,
    Fulfilled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Active => "active",
            ReservationStatus::Fulfilled => "fulfilled",
        }
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ReservationStatus::Active),
            "fulfilled" => Ok(ReservationStatus::Fulfilled),
            other => Err(AppError::ConversionEntityError(format!(
                "unknown reservation status: {other}"
            ))),
        }
    }
}
