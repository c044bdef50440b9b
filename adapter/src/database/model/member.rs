use kernel::model::member::Member;
use shared::error::AppError;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct MemberRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub membership_number: String,
    pub status: String,
}

impl TryFrom<MemberRow> for Member {
    type Error = AppError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        Ok(Member {
            id: row.id.into(),
            name: row.name,
            email: row.email,
            membership_number: row.membership_number,
            status: row.status.parse()?,
        })
    }
}
