use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use shared::{
    calendar,
    config::LendingConfig,
    error::{AppError, AppResult},
};

use crate::{
    model::{
        book::BookStatus,
        fine::{event::CreateFine, PaidFine},
        id::{BookId, FineId, LoanId, MemberId},
        loan::{event::CreateLoan, Loan, ReturnedLoan},
        member::MemberStatus,
        reservation::{event::CreateReservation, Reservation},
    },
    store::LendingStore,
};

mod overdue;
mod status;

pub(crate) use overdue::refresh_overdue;
pub(crate) use status::recompute_member_status;


/// 1 人の会員が同時に借りられる冊数の上限
pub const MAX_OPEN_LOANS: i64 = 3;

#[mockall::automock]
#[async_trait]
pub trait LendingOperations: Send + Sync {
    // 貸出操作
    async fn borrow(&self, member_id: MemberId, book_id: BookId) -> AppResult<Loan>;
    // 返却操作。延滞していた場合は罰金を作成して返す
    async fn return_loan(&self, loan_id: LoanId) -> AppResult<ReturnedLoan>;
    // 予約操作
    async fn reserve(&self, member_id: MemberId, book_id: BookId) -> AppResult<Reservation>;
    // 罰金の支払い
    async fn pay_fine(&self, fine_id: FineId) -> AppResult<PaidFine>;
    // 延滞中の未返却貸出の一覧（取得前に延滞状態を最新化する）
    async fn list_overdue(&self) -> AppResult<Vec<Loan>>;
}

/// 貸出まわりの状態遷移をすべて担うエンジン。
///
/// 各操作は 1 つのストアトランザクションとして実行する。必要な行のロックは
/// 期限切れ貸出 → 会員 → 蔵書 → 従属行（予約・罰金・貸出）の順で取り、
/// 検証に失敗した時点でトランザクションごと破棄する。部分的な書き込みが
/// 残ることはない。
#[derive(new)]
pub struct LendingEngine {
    store: Arc<dyn LendingStore>,
    config: LendingConfig,
}

#[async_trait]
impl LendingOperations for LendingEngine {
    async fn borrow(&self, member_id: MemberId, book_id: BookId) -> AppResult<Loan> {
        let now = Utc::now();
        let mut tx = self.store.begin().await?;

        // 延滞状態を最新化してから判定する
        refresh_overdue(tx.as_mut(), now).await?;

        let member = tx
            .lock_member(member_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("member not found".into()))?;
        if member.status == MemberStatus::Suspended {
            return Err(AppError::InvalidState(
                "member is suspended and cannot borrow books".into(),
            ));
        }
        if tx.count_unpaid_fines(member_id).await? > 0 {
            return Err(AppError::InvalidState(
                "member has unpaid fines and cannot borrow books".into(),
            ));
        }
        if tx.count_open_loans(member_id).await? >= MAX_OPEN_LOANS {
            return Err(AppError::LimitExceeded(format!(
                "member has reached the borrowing limit of {MAX_OPEN_LOANS} books"
            )));
        }

        let book = tx
            .lock_book(book_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("book not found".into()))?;
        if book.status == BookStatus::Maintenance {
            return Err(AppError::InvalidState(
                "book is under maintenance and cannot be borrowed".into(),
            ));
        }

        // 予約優先: 先頭の予約者以外には貸し出さない
        if let Some(reservation) = tx.earliest_active_reservation(book_id).await? {
            if reservation.member_id != member_id {
                return Err(AppError::InvalidState(
                    "book is reserved for another member".into(),
                ));
            }
            tx.fulfill_reservation(reservation.id).await?;
        }

        if book.available_copies <= 0 {
            return Err(AppError::InvalidState("no available copies to borrow".into()));
        }

        let loan = tx
            .insert_loan(CreateLoan {
                book_id,
                member_id,
                borrowed_at: now,
                due_date: calendar::add_days(now, self.config.loan_period_days),
            })
            .await?;

        let available_copies = book.available_copies - 1;
        let reservations = tx.count_active_reservations(book_id).await?;
        tx.update_book_availability(
            book_id,
            available_copies,
            BookStatus::project(book.status, available_copies, reservations),
        )
        .await?;

        tx.commit().await?;
        Ok(loan)
    }

    async fn return_loan(&self, loan_id: LoanId) -> AppResult<ReturnedLoan> {
        let now = Utc::now();
        let mut tx = self.store.begin().await?;

        refresh_overdue(tx.as_mut(), now).await?;

        let loan = tx
            .lock_loan(loan_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("loan not found".into()))?;
        if loan.is_returned() {
            return Err(AppError::InvalidState("loan is already returned".into()));
        }

        let member = tx
            .lock_member(loan.member_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("member not found".into()))?;
        let book = tx
            .lock_book(loan.book_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("book not found".into()))?;

        // 罰金は暦日単位。返却が期限当日中なら延滞扱いでも金額は発生しない
        let fine = if now > loan.due_date {
            let days_overdue = calendar::days_between(now, loan.due_date);
            if days_overdue > 0 {
                Some(
                    tx.insert_fine(CreateFine {
                        member_id: member.id,
                        loan_id: loan.id,
                        amount: days_overdue as f64 * self.config.daily_fine_rate,
                    })
                    .await?,
                )
            } else {
                None
            }
        } else {
            None
        };

        tx.update_loan_returned(loan_id, now).await?;

        let available_copies = book.available_copies + 1;
        let reservations = tx.count_active_reservations(book.id).await?;
        tx.update_book_availability(
            book.id,
            available_copies,
            BookStatus::project(book.status, available_copies, reservations),
        )
        .await?;

        // 返却で延滞数が減り、貸出停止が解除されることがある
        recompute_member_status(tx.as_mut(), member.id).await?;

        tx.commit().await?;
        Ok(ReturnedLoan { loan_id, fine })
    }

    async fn reserve(&self, member_id: MemberId, book_id: BookId) -> AppResult<Reservation> {
        let now = Utc::now();
        let mut tx = self.store.begin().await?;

        let member = tx
            .lock_member(member_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("member not found".into()))?;
        if member.status == MemberStatus::Suspended {
            return Err(AppError::InvalidState(
                "member is suspended and cannot reserve books".into(),
            ));
        }

        let book = tx
            .lock_book(book_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("book not found".into()))?;
        if book.status == BookStatus::Maintenance {
            return Err(AppError::InvalidState(
                "book is under maintenance and cannot be reserved".into(),
            ));
        }

        if tx
            .active_reservation_for(member_id, book_id)
            .await?
            .is_some()
        {
            return Err(AppError::InvalidState(
                "member has already reserved this book".into(),
            ));
        }

        let reservation = tx
            .insert_reservation(CreateReservation {
                book_id,
                member_id,
                reserved_at: now,
            })
            .await?;

        let reservations = tx.count_active_reservations(book_id).await?;
        tx.update_book_availability(
            book_id,
            book.available_copies,
            BookStatus::project(book.status, book.available_copies, reservations),
        )
        .await?;

        tx.commit().await?;
        Ok(reservation)
    }

    async fn pay_fine(&self, fine_id: FineId) -> AppResult<PaidFine> {
        let now = Utc::now();
        let mut tx = self.store.begin().await?;

        let fine = tx
            .lock_fine(fine_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("fine not found".into()))?;
        if fine.is_paid() {
            return Err(AppError::InvalidState("fine is already paid".into()));
        }

        tx.mark_fine_paid(fine_id, now).await?;

        // 最後の未払い罰金を払えば貸出停止が解除される
        recompute_member_status(tx.as_mut(), fine.member_id).await?;

        tx.commit().await?;
        Ok(PaidFine {
            id: fine_id,
            paid_at: now,
        })
    }

    async fn list_overdue(&self) -> AppResult<Vec<Loan>> {
        let now = Utc::now();
        let mut tx = self.store.begin().await?;

        refresh_overdue(tx.as_mut(), now).await?;
        let loans = tx.list_overdue_loans().await?;

        tx.commit().await?;
        Ok(loans)
    }
}
