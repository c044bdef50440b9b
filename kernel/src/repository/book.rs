use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    book::{
        event::{CreateBook, UpdateBook},
        Book,
    },
    id::BookId,
};

#[mockall::automock]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn create(&self, event: CreateBook) -> AppResult<Book>;
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    // 貸出可能（在庫があり available）な蔵書のみ
    async fn find_available(&self) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>>;
    async fn update(&self, event: UpdateBook) -> AppResult<Book>;
    async fn delete(&self, book_id: BookId) -> AppResult<()>;
}
