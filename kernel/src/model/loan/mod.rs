use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::{
    fine::Fine,
    id::{BookId, LoanId, MemberId},
};

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    pub id: LoanId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub borrowed_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub status: LoanStatus,
}

impl Loan {
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }
}

/// 返却操作の結果。延滞していなければ罰金は発生しない。
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnedLoan {
    pub loan_id: LoanId,
    pub fine: Option<Fine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Active,
    Overdue,
    Returned,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::Overdue => "overdue",
            LoanStatus::Returned => "returned",
        }
    }
}

impl std::str::FromStr for LoanStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(LoanStatus::Active),
            "overdue" => Ok(LoanStatus::Overdue),
            "returned" => Ok(LoanStatus::Returned),
            other => Err(AppError::ConversionEntityError(format!(
                "unknown loan status: {other}"
            ))),
        }
    }
}
