use crate::model::id::{LoanId, MemberId};

#[derive(Debug)]
pub struct CreateFine {
    pub member_id: MemberId,
    pub loan_id: LoanId,
    pub amount: f64,
}
