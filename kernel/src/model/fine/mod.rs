use chrono::{DateTime, Utc};

use super::id::{FineId, LoanId, MemberId};

pub mod event;

/// 延滞返却 1 件につき最大 1 件だけ作られる。支払い済みになったら以後変更されない。
#[derive(Debug, Clone, PartialEq)]
pub struct Fine {
    pub id: FineId,
    pub member_id: MemberId,
    pub loan_id: LoanId,
    pub amount: f64,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Fine {
    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaidFine {
    pub id: FineId,
    pub paid_at: DateTime<Utc>,
}
