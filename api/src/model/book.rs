use garde::Validate;
use kernel::model::{
    book::{
        event::{CreateBook, UpdateBook},
        Book, BookStatus,
    },
    id::BookId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[garde(length(min = 1))]
    pub isbn: String,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub author: String,
    #[garde(skip)]
    pub category: Option<String>,
    #[garde(skip)]
    pub status: Option<BookStatus>,
    #[garde(range(min = 1))]
    pub total_copies: i32,
    #[garde(skip)]
    pub available_copies: Option<i32>,
}

impl From<CreateBookRequest> for CreateBook {
    fn from(value: CreateBookRequest) -> Self {
        let CreateBookRequest {
            isbn,
            title,
            author,
            category,
            status,
            total_copies,
            available_copies,
        } = value;
        Self {
            isbn,
            title,
            author,
            category,
            status,
            total_copies,
            available_copies,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[garde(inner(length(min = 1)))]
    pub isbn: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub title: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub author: Option<String>,
    #[garde(skip)]
    pub category: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub total_copies: Option<i32>,
    #[garde(inner(range(min = 0)))]
    pub available_copies: Option<i32>,
}

impl From<(BookId, UpdateBookRequest)> for UpdateBook {
    fn from((book_id, value): (BookId, UpdateBookRequest)) -> Self {
        let UpdateBookRequest {
            isbn,
            title,
            author,
            category,
            total_copies,
            available_copies,
        } = value;
        Self {
            book_id,
            isbn,
            title,
            author,
            category,
            total_copies,
            available_copies,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: BookId,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub status: BookStatus,
    pub total_copies: i32,
    pub available_copies: i32,
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        let Book {
            id,
            isbn,
            title,
            author,
            category,
            status,
            total_copies,
            available_copies,
        } = value;
        Self {
            id,
            isbn,
            title,
            author,
            category,
            status,
            total_copies,
            available_copies,
        }
    }
}
