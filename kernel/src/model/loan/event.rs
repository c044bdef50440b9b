use chrono::{DateTime, Utc};

use crate::model::id::{BookId, MemberId};

#[derive(Debug)]
pub struct CreateLoan {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub borrowed_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}
