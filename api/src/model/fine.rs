use chrono::{DateTime, Utc};
use kernel::model::{
    fine::{Fine, PaidFine},
    id::{FineId, LoanId, MemberId},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FineResponse {
    pub id: FineId,
    pub member_id: MemberId,
    pub loan_id: LoanId,
    pub amount: f64,
    pub paid_at: Option<DateTime<Utc>>,
}

impl From<Fine> for FineResponse {
    fn from(value: Fine) -> Self {
        let Fine {
            id,
            member_id,
            loan_id,
            amount,
            paid_at,
        } = value;
        Self {
            id,
            member_id,
            loan_id,
            amount,
            paid_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidFineResponse {
    pub id: FineId,
    pub paid_at: DateTime<Utc>,
}

impl From<PaidFine> for PaidFineResponse {
    fn from(value: PaidFine) -> Self {
        Self {
            id: value.id,
            paid_at: value.paid_at,
        }
    }
}
