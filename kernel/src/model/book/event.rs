use super::BookStatus;
use crate::model::id::BookId;

#[derive(Debug)]
pub struct CreateBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub status: Option<BookStatus>,
    pub total_copies: i32,
    pub available_copies: Option<i32>,
}

// ステータスと在庫数の整合は貸出エンジン側が守るため、
// この更新イベントは書誌情報と蔵書数のみを対象にする
#[derive(Debug)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub total_copies: Option<i32>,
    pub available_copies: Option<i32>,
}
