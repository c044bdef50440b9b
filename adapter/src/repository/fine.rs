use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{fine::Fine, id::MemberId},
    repository::fine::FineRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::fine::FineRow, ConnectionPool};

#[derive(new)]
pub struct FineRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl FineRepository for FineRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Fine>> {
        let rows: Vec<FineRow> = sqlx::query_as(
            r#"
            SELECT id, member_id, loan_id, amount, paid_at
            FROM fines
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Fine::try_from).collect()
    }

    async fn find_unpaid_by_member_id(&self, member_id: MemberId) -> AppResult<Vec<Fine>> {
        let rows: Vec<FineRow> = sqlx::query_as(
            r#"
            SELECT id, member_id, loan_id, amount, paid_at
            FROM fines
            WHERE member_id = $1 AND paid_at IS NULL
            "#,
        )
        .bind(member_id.raw())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Fine::try_from).collect()
    }
}
