use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookId, LoanId, MemberId},
    loan::{Loan, LoanStatus, ReturnedLoan},
};
use serde::{Deserialize, Serialize};

use super::fine::FineResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    pub member_id: MemberId,
    pub book_id: BookId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    pub id: LoanId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub borrowed_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub status: LoanStatus,
}

impl From<Loan> for LoanResponse {
    fn from(value: Loan) -> Self {
        let Loan {
            id,
            book_id,
            member_id,
            borrowed_at,
            due_date,
            returned_at,
            status,
        } = value;
        Self {
            id,
            book_id,
            member_id,
            borrowed_at,
            due_date,
            returned_at,
            status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnedLoanResponse {
    pub loan_id: LoanId,
    pub fine: Option<FineResponse>,
}

impl From<ReturnedLoan> for ReturnedLoanResponse {
    fn from(value: ReturnedLoan) -> Self {
        Self {
            loan_id: value.loan_id,
            fine: value.fine.map(FineResponse::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn loan_response_serializes_in_camel_case() {
        let response = LoanResponse {
            id: LoanId::new(),
            book_id: BookId::new(),
            member_id: MemberId::new(),
            borrowed_at: Utc::now(),
            due_date: Utc::now(),
            returned_at: None,
            status: LoanStatus::Active,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("bookId").is_some());
        assert!(json.get("dueDate").is_some());
        assert_eq!(json["status"], "active");
    }
}
