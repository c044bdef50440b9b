use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::LoanId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::loan::{CreateLoanRequest, LoanResponse, ReturnedLoanResponse};

pub async fn borrow_book(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateLoanRequest>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    registry
        .lending()
        .borrow(req.member_id, req.book_id)
        .await
        .map(LoanResponse::from)
        .map(|body| (StatusCode::CREATED, Json(body)))
}

pub async fn return_book(
    State(registry): State<AppRegistry>,
    Path(loan_id): Path<LoanId>,
) -> AppResult<Json<ReturnedLoanResponse>> {
    registry
        .lending()
        .return_loan(loan_id)
        .await
        .map(ReturnedLoanResponse::from)
        .map(Json)
}

pub async fn show_overdue_loans(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<LoanResponse>>> {
    registry
        .lending()
        .list_overdue()
        .await
        .map(|loans| loans.into_iter().map(LoanResponse::from).collect())
        .map(Json)
}
