use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{fine::Fine, id::MemberId};

#[mockall::automock]
#[async_trait]
pub trait FineRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Fine>>;
    async fn find_unpaid_by_member_id(&self, member_id: MemberId) -> AppResult<Vec<Fine>>;
}
