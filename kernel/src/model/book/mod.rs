use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::id::BookId;

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub status: BookStatus,
    pub total_copies: i32,
    pub available_copies: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    Available,
    Borrowed,
    Reserved,
    Maintenance,
}

impl BookStatus {
    /// 在庫数と有効な予約数から蔵書ステータスを導出する。
    /// 貸出・返却・予約のどの操作でも、ステータスの再計算は必ずこの関数を通す。
    pub fn project(current: BookStatus, available_copies: i32, active_reservations: i64) -> Self {
        if current == BookStatus::Maintenance {
            return BookStatus::Maintenance;
        }
        if active_reservations > 0 && active_reservations >= i64::from(available_copies.max(0)) {
            BookStatus::Reserved
        } else if available_copies <= 0 {
            BookStatus::Borrowed
        } else {
            BookStatus::Available
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Borrowed => "borrowed",
            BookStatus::Reserved => "reserved",
            BookStatus::Maintenance => "maintenance",
        }
    }
}

impl std::str::FromStr for BookStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(BookStatus::Available),
            "borrowed" => Ok(BookStatus::Borrowed),
            "reserved" => Ok(BookStatus::Reserved),
            "maintenance" => Ok(BookStatus::Maintenance),
            other => Err(AppError::ConversionEntityError(format!(
                "unknown book status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // 予約がなければ在庫の有無だけで決まる
    #[case(BookStatus::Available, 2, 0, BookStatus::Available)]
    #[case(BookStatus::Available, 0, 0, BookStatus::Borrowed)]
    // 予約が残り在庫を食い尽くしていれば reserved
    #[case(BookStatus::Available, 1, 1, BookStatus::Reserved)]
    #[case(BookStatus::Borrowed, 0, 1, BookStatus::Reserved)]
    #[case(BookStatus::Available, 3, 1, BookStatus::Available)]
    // メンテナンス中は貸出系の操作では変化しない
    #[case(BookStatus::Maintenance, 5, 0, BookStatus::Maintenance)]
    fn project_derives_status(
        #[case] current: BookStatus,
        #[case] available: i32,
        #[case] reservations: i64,
        #[case] expected: BookStatus,
    ) {
        assert_eq!(BookStatus::project(current, available, reservations), expected);
    }
}
