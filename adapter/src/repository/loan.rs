use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{id::MemberId, loan::Loan},
    repository::loan::LoanRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::loan::LoanRow, ConnectionPool};

#[derive(new)]
pub struct LoanRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl LoanRepository for LoanRepositoryImpl {
    async fn find_open_by_member_id(&self, member_id: MemberId) -> AppResult<Vec<Loan>> {
        let rows: Vec<LoanRow> = sqlx::query_as(
            r#"
            SELECT id, book_id, member_id, borrowed_at, due_date, returned_at, status
            FROM loans
            WHERE member_id = $1
              AND returned_at IS NULL
              AND status IN ('active', 'overdue')
            ORDER BY borrowed_at DESC
            "#,
        )
        .bind(member_id.raw())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Loan::try_from).collect()
    }
}
