use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

use crate::model::{
    book::{Book, BookStatus},
    fine::{event::CreateFine, Fine},
    id::{BookId, FineId, LoanId, MemberId, ReservationId},
    loan::{event::CreateLoan, Loan},
    member::{Member, MemberStatus},
    reservation::{event::CreateReservation, Reservation},
};

/// 貸出エンジンが利用するトランザクショナルなストア。
/// `begin` で開始したトランザクションは `commit` するまで他の呼び出しから
/// 変更が見えず、`commit` せずに破棄すればすべてロールバックされる。
#[async_trait]
pub trait LendingStore: Send + Sync {
    async fn begin(&self) -> AppResult<Box<dyn StoreTx>>;
}

/// 開いたトランザクションの中で使える操作の集合。
/// `lock_*` は行の排他ロックを取り、トランザクション終了まで保持する。
#[async_trait]
pub trait StoreTx: Send {
    async fn lock_member(&mut self, member_id: MemberId) -> AppResult<Option<Member>>;
    async fn lock_book(&mut self, book_id: BookId) -> AppResult<Option<Book>>;
    async fn lock_loan(&mut self, loan_id: LoanId) -> AppResult<Option<Loan>>;
    async fn lock_fine(&mut self, fine_id: FineId) -> AppResult<Option<Fine>>;

    // 期限切れの未返却貸出をまとめてロックして返す
    async fn lock_due_loans(&mut self, now: DateTime<Utc>) -> AppResult<Vec<Loan>>;
    async fn mark_loans_overdue(&mut self, loan_ids: &[LoanId]) -> AppResult<()>;

    async fn count_open_loans(&mut self, member_id: MemberId) -> AppResult<i64>;
    async fn count_overdue_loans(&mut self, member_id: MemberId) -> AppResult<i64>;
    async fn count_unpaid_fines(&mut self, member_id: MemberId) -> AppResult<i64>;
    async fn count_active_reservations(&mut self, book_id: BookId) -> AppResult<i64>;

    // 予約順の先頭（最も古い有効な予約）
    async fn earliest_active_reservation(
        &mut self,
        book_id: BookId,
    ) -> AppResult<Option<Reservation>>;
    async fn active_reservation_for(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
    ) -> AppResult<Option<Reservation>>;

    async fn insert_loan(&mut self, event: CreateLoan) -> AppResult<Loan>;
    async fn insert_fine(&mut self, event: CreateFine) -> AppResult<Fine>;
    async fn insert_reservation(&mut self, event: CreateReservation) -> AppResult<Reservation>;

    async fn update_member_status(
        &mut self,
        member_id: MemberId,
        status: MemberStatus,
    ) -> AppResult<()>;
    async fn update_book_availability(
        &mut self,
        book_id: BookId,
        available_copies: i32,
        status: BookStatus,
    ) -> AppResult<()>;
    async fn update_loan_returned(
        &mut self,
        loan_id: LoanId,
        returned_at: DateTime<Utc>,
    ) -> AppResult<()>;
    async fn fulfill_reservation(&mut self, reservation_id: ReservationId) -> AppResult<()>;
    async fn mark_fine_paid(&mut self, fine_id: FineId, paid_at: DateTime<Utc>)
        -> AppResult<()>;

    async fn list_overdue_loans(&mut self) -> AppResult<Vec<Loan>>;

    async fn commit(self: Box<Self>) -> AppResult<()>;
}
