use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::{
    model::{
        book::{Book, BookStatus},
        fine::{event::CreateFine, Fine},
        id::{BookId, FineId, LoanId, MemberId, ReservationId},
        loan::{event::CreateLoan, Loan},
        member::{Member, MemberStatus},
        reservation::{event::CreateReservation, Reservation},
    },
    store::{LendingStore, StoreTx},
};
use shared::error::{AppError, AppResult};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::database::{
    model::{
        book::BookRow, fine::FineRow, loan::LoanRow, member::MemberRow,
        reservation::ReservationRow,
    },
    ConnectionPool,
};

/// `SELECT ... FOR UPDATE` による行ロックと 1 トランザクション内の複数更新を
/// そのまま提供する Postgres 実装。ロックはコミットかロールバックまで保持される。
#[derive(new)]
pub struct PgLendingStore {
    db: ConnectionPool,
}

#[async_trait]
impl LendingStore for PgLendingStore {
    async fn begin(&self) -> AppResult<Box<dyn StoreTx>> {
        let tx = self.db.begin().await?;
        Ok(Box::new(PgStoreTx { tx }))
    }
}

pub struct PgStoreTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl StoreTx for PgStoreTx {
    async fn lock_member(&mut self, member_id: MemberId) -> AppResult<Option<Member>> {
        let row: Option<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, membership_number, status
            FROM members
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(member_id.raw())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Member::try_from).transpose()
    }

    async fn lock_book(&mut self, book_id: BookId) -> AppResult<Option<Book>> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            SELECT id, isbn, title, author, category, status, total_copies, available_copies
            FROM books
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(book_id.raw())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Book::try_from).transpose()
    }

    async fn lock_loan(&mut self, loan_id: LoanId) -> AppResult<Option<Loan>> {
        let row: Option<LoanRow> = sqlx::query_as(
            r#"
            SELECT id, book_id, member_id, borrowed_at, due_date, returned_at, status
            FROM loans
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(loan_id.raw())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Loan::try_from).transpose()
    }

    async fn lock_fine(&mut self, fine_id: FineId) -> AppResult<Option<Fine>> {
        let row: Option<FineRow> = sqlx::query_as(
            r#"
            SELECT id, member_id, loan_id, amount, paid_at
            FROM fines
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(fine_id.raw())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Fine::try_from).transpose()
    }

    async fn lock_due_loans(&mut self, now: DateTime<Utc>) -> AppResult<Vec<Loan>> {
        let rows: Vec<LoanRow> = sqlx::query_as(
            r#"
            SELECT id, book_id, member_id, borrowed_at, due_date, returned_at, status
            FROM loans
            WHERE status = 'active'
              AND returned_at IS NULL
              AND due_date < $1
            ORDER BY due_date
            FOR UPDATE
            "#,
        )
        .bind(now)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Loan::try_from).collect()
    }

    async fn mark_loans_overdue(&mut self, loan_ids: &[LoanId]) -> AppResult<()> {
        let ids: Vec<Uuid> = loan_ids.iter().map(|id| id.raw()).collect();
        sqlx::query("UPDATE loans SET status = 'overdue' WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut *self.tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    async fn count_open_loans(&mut self, member_id: MemberId) -> AppResult<i64> {
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM loans
            WHERE member_id = $1
              AND returned_at IS NULL
              AND status IN ('active', 'overdue')
            "#,
        )
        .bind(member_id.raw())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn count_overdue_loans(&mut self, member_id: MemberId) -> AppResult<i64> {
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM loans
            WHERE member_id = $1
              AND returned_at IS NULL
              AND status = 'overdue'
            "#,
        )
        .bind(member_id.raw())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn count_unpaid_fines(&mut self, member_id: MemberId) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM fines WHERE member_id = $1 AND paid_at IS NULL",
        )
        .bind(member_id.raw())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn count_active_reservations(&mut self, book_id: BookId) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations WHERE book_id = $1 AND status = 'active'",
        )
        .bind(book_id.raw())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn earliest_active_reservation(
        &mut self,
        book_id: BookId,
    ) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
            SELECT id, book_id, member_id, reserved_at, status
            FROM reservations
            WHERE book_id = $1 AND status = 'active'
            ORDER BY reserved_at
            LIMIT 1
            FOR UPDATE
            "#,
        )
        .bind(book_id.raw())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn active_reservation_for(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
    ) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
            SELECT id, book_id, member_id, reserved_at, status
            FROM reservations
            WHERE book_id = $1 AND member_id = $2 AND status = 'active'
            LIMIT 1
            "#,
        )
        .bind(book_id.raw())
        .bind(member_id.raw())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn insert_loan(&mut self, event: CreateLoan) -> AppResult<Loan> {
        let row: LoanRow = sqlx::query_as(
            r#"
            INSERT INTO loans (id, book_id, member_id, borrowed_at, due_date, status)
            VALUES ($1, $2, $3, $4, $5, 'active')
            RETURNING id, book_id, member_id, borrowed_at, due_date, returned_at, status
            "#,
        )
        .bind(LoanId::new().raw())
        .bind(event.book_id.raw())
        .bind(event.member_id.raw())
        .bind(event.borrowed_at)
        .bind(event.due_date)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn insert_fine(&mut self, event: CreateFine) -> AppResult<Fine> {
        let row: FineRow = sqlx::query_as(
            r#"
            INSERT INTO fines (id, member_id, loan_id, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id, member_id, loan_id, amount, paid_at
            "#,
        )
        .bind(FineId::new().raw())
        .bind(event.member_id.raw())
        .bind(event.loan_id.raw())
        .bind(event.amount)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn insert_reservation(&mut self, event: CreateReservation) -> AppResult<Reservation> {
        let row: ReservationRow = sqlx::query_as(
            r#"
            INSERT INTO reservations (id, book_id, member_id, reserved_at, status)
            VALUES ($1, $2, $3, $4, 'active')
            RETURNING id, book_id, member_id, reserved_at, status
            "#,
        )
        .bind(ReservationId::new().raw())
        .bind(event.book_id.raw())
        .bind(event.member_id.raw())
        .bind(event.reserved_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn update_member_status(
        &mut self,
        member_id: MemberId,
        status: MemberStatus,
    ) -> AppResult<()> {
        let res = sqlx::query("UPDATE members SET status = $2 WHERE id = $1")
            .bind(member_id.raw())
            .bind(status.as_str())
            .execute(&mut *self.tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no member has been updated".into(),
            ));
        }
        Ok(())
    }

    async fn update_book_availability(
        &mut self,
        book_id: BookId,
        available_copies: i32,
        status: BookStatus,
    ) -> AppResult<()> {
        let res = sqlx::query(
            "UPDATE books SET available_copies = $2, status = $3 WHERE id = $1",
        )
        .bind(book_id.raw())
        .bind(available_copies)
        .bind(status.as_str())
        .execute(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no book has been updated".into(),
            ));
        }
        Ok(())
    }

    async fn update_loan_returned(
        &mut self,
        loan_id: LoanId,
        returned_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let res = sqlx::query(
            "UPDATE loans SET returned_at = $2, status = 'returned' WHERE id = $1",
        )
        .bind(loan_id.raw())
        .bind(returned_at)
        .execute(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no loan has been updated".into(),
            ));
        }
        Ok(())
    }

    async fn fulfill_reservation(&mut self, reservation_id: ReservationId) -> AppResult<()> {
        let res = sqlx::query("UPDATE reservations SET status = 'fulfilled' WHERE id = $1")
            .bind(reservation_id.raw())
            .execute(&mut *self.tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no reservation has been updated".into(),
            ));
        }
        Ok(())
    }

    async fn mark_fine_paid(
        &mut self,
        fine_id: FineId,
        paid_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let res = sqlx::query("UPDATE fines SET paid_at = $2 WHERE id = $1")
            .bind(fine_id.raw())
            .bind(paid_at)
            .execute(&mut *self.tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowAffectedError(
                "no fine has been updated".into(),
            ));
        }
        Ok(())
    }

    async fn list_overdue_loans(&mut self) -> AppResult<Vec<Loan>> {
        let rows: Vec<LoanRow> = sqlx::query_as(
            r#"
            SELECT id, book_id, member_id, borrowed_at, due_date, returned_at, status
            FROM loans
            WHERE status = 'overdue' AND returned_at IS NULL
            ORDER BY due_date
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Loan::try_from).collect()
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx.commit().await.map_err(AppError::TransactionError)
    }
}
