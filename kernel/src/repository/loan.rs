use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::MemberId, loan::Loan};

#[mockall::automock]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    // 会員 ID に紐づく未返却の貸出情報を取得する
    async fn find_open_by_member_id(&self, member_id: MemberId) -> AppResult<Vec<Loan>>;
}
