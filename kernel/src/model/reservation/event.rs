use chrono::{DateTime, Utc};

use crate::model::id::{BookId, MemberId};

#[derive(Debug)]
pub struct CreateReservation {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub reserved_at: DateTime<Utc>,
}
