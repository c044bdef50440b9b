use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookId, MemberId, ReservationId},
    reservation::{Reservation, ReservationStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub member_id: MemberId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub reserved_at: DateTime<Utc>,
    pub status: ReservationStatus,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            book_id,
            member_id,
            reserved_at,
            status,
        } = value;
        Self {
            id,
            book_id,
            member_id,
            reserved_at,
            status,
        }
    }
}
