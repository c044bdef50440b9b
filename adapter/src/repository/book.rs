use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        book::{
            event::{CreateBook, UpdateBook},
            Book, BookStatus,
        },
        id::BookId,
    },
    repository::book::BookRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::book::BookRow, ConnectionPool};

#[derive(new)]
pub struct BookRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn create(&self, event: CreateBook) -> AppResult<Book> {
        let status = event.status.unwrap_or(BookStatus::Available);
        let available_copies = event.available_copies.unwrap_or(event.total_copies);
        let row: BookRow = sqlx::query_as(
            r#"
            INSERT INTO books (id, isbn, title, author, category, status, total_copies, available_copies)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, isbn, title, author, category, status, total_copies, available_copies
            "#,
        )
        .bind(BookId::new().raw())
        .bind(&event.isbn)
        .bind(&event.title)
        .bind(&event.author)
        .bind(&event.category)
        .bind(status.as_str())
        .bind(event.total_copies)
        .bind(available_copies)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows: Vec<BookRow> = sqlx::query_as(
            r#"
            SELECT id, isbn, title, author, category, status, total_copies, available_copies
            FROM books
            ORDER BY title
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn find_available(&self) -> AppResult<Vec<Book>> {
        let rows: Vec<BookRow> = sqlx::query_as(
            r#"
            SELECT id, isbn, title, author, category, status, total_copies, available_copies
            FROM books
            WHERE available_copies > 0 AND status = 'available'
            ORDER BY title
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            SELECT id, isbn, title, author, category, status, total_copies, available_copies
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Book::try_from).transpose()
    }

    // ステータスはこの経路では更新させない。貸出・返却・予約の結果としてのみ変わる
    async fn update(&self, event: UpdateBook) -> AppResult<Book> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            UPDATE books
            SET isbn = COALESCE($2, isbn),
                title = COALESCE($3, title),
                author = COALESCE($4, author),
                category = COALESCE($5, category),
                total_copies = COALESCE($6, total_copies),
                available_copies = COALESCE($7, available_copies)
            WHERE id = $1
            RETURNING id, isbn, title, author, category, status, total_copies, available_copies
            "#,
        )
        .bind(event.book_id.raw())
        .bind(event.isbn)
        .bind(event.title)
        .bind(event.author)
        .bind(event.category)
        .bind(event.total_copies)
        .bind(event.available_copies)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.ok_or_else(|| AppError::EntityNotFound("book not found".into()))?
            .try_into()
    }

    async fn delete(&self, book_id: BookId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("book not found".into()));
        }
        Ok(())
    }
}
