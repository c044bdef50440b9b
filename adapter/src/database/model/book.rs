use kernel::model::book::Book;
use shared::error::AppError;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct BookRow {
    pub id: Uuid,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub status: String,
    pub total_copies: i32,
    pub available_copies: i32,
}

impl TryFrom<BookRow> for Book {
    type Error = AppError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book {
            id: row.id.into(),
            isbn: row.isbn,
            title: row.title,
            author: row.author,
            category: row.category,
            status: row.status.parse()?,
            total_copies: row.total_copies,
            available_copies: row.available_copies,
        })
    }
}
