use chrono::{DateTime, Utc};
use kernel::model::loan::Loan;
use shared::error::AppError;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct LoanRow {
    pub id: Uuid,
    pub book_id: Uuid,
    pub member_id: Uuid,
    pub borrowed_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub status: String,
}

impl TryFrom<LoanRow> for Loan {
    type Error = AppError;

    fn try_from(row: LoanRow) -> Result<Self, Self::Error> {
        Ok(Loan {
            id: row.id.into(),
            book_id: row.book_id.into(),
            member_id: row.member_id.into(),
            borrowed_at: row.borrowed_at,
            due_date: row.due_date,
            returned_at: row.returned_at,
            status: row.status.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::loan::LoanStatus;

    fn row(status: &str) -> LoanRow {
        LoanRow {
            id: Uuid::new_v4(),
            book_id: Uuid::new_v4(),
            member_id: Uuid::new_v4(),
            borrowed_at: Utc::now(),
            due_date: Utc::now(),
            returned_at: None,
            status: status.into(),
        }
    }

    #[test]
    fn converts_known_status() {
        let loan = Loan::try_from(row("overdue")).unwrap();
        assert_eq!(loan.status, LoanStatus::Overdue);
    }

    #[test]
    fn rejects_unknown_status() {
        let err = Loan::try_from(row("lost")).unwrap_err();
        assert!(matches!(err, AppError::ConversionEntityError(_)));
    }
}
