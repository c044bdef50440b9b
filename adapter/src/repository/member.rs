use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::MemberId,
        member::{
            event::{CreateMember, UpdateMember},
            Member, MemberStatus,
        },
    },
    repository::member::MemberRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::member::MemberRow, ConnectionPool};

#[derive(new)]
pub struct MemberRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MemberRepository for MemberRepositoryImpl {
    async fn create(&self, event: CreateMember) -> AppResult<Member> {
        let status = event.status.unwrap_or(MemberStatus::Active);
        let row: MemberRow = sqlx::query_as(
            r#"
            INSERT INTO members (id, name, email, membership_number, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, membership_number, status
            "#,
        )
        .bind(MemberId::new().raw())
        .bind(&event.name)
        .bind(&event.email)
        .bind(&event.membership_number)
        .bind(status.as_str())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn find_all(&self) -> AppResult<Vec<Member>> {
        let rows: Vec<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, membership_number, status
            FROM members
            ORDER BY name
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Member::try_from).collect()
    }

    async fn find_by_id(&self, member_id: MemberId) -> AppResult<Option<Member>> {
        let row: Option<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, membership_number, status
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(member_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Member::try_from).transpose()
    }

    async fn update(&self, event: UpdateMember) -> AppResult<Member> {
        let row: Option<MemberRow> = sqlx::query_as(
            r#"
            UPDATE members
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                membership_number = COALESCE($4, membership_number),
                status = COALESCE($5, status)
            WHERE id = $1
            RETURNING id, name, email, membership_number, status
            "#,
        )
        .bind(event.member_id.raw())
        .bind(event.name)
        .bind(event.email)
        .bind(event.membership_number)
        .bind(event.status.map(|s| s.as_str()))
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.ok_or_else(|| AppError::EntityNotFound("member not found".into()))?
            .try_into()
    }

    async fn delete(&self, member_id: MemberId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(member_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("member not found".into()));
        }
        Ok(())
    }
}
