use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::MemberId, member::event::UpdateMember};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    loan::LoanResponse,
    member::{CreateMemberRequest, MemberResponse, UpdateMemberRequest},
};

pub async fn register_member(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateMemberRequest>,
) -> AppResult<(StatusCode, Json<MemberResponse>)> {
    req.validate(&())?;

    registry
        .member_repository()
        .create(req.into())
        .await
        .map(MemberResponse::from)
        .map(|body| (StatusCode::CREATED, Json(body)))
}

pub async fn show_member_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<MemberResponse>>> {
    registry
        .member_repository()
        .find_all()
        .await
        .map(|members| members.into_iter().map(MemberResponse::from).collect())
        .map(Json)
}

pub async fn show_member(
    State(registry): State<AppRegistry>,
    Path(member_id): Path<MemberId>,
) -> AppResult<Json<MemberResponse>> {
    registry
        .member_repository()
        .find_by_id(member_id)
        .await?
        .map(MemberResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound("member not found".into()))
}

pub async fn update_member(
    State(registry): State<AppRegistry>,
    Path(member_id): Path<MemberId>,
    Json(req): Json<UpdateMemberRequest>,
) -> AppResult<Json<MemberResponse>> {
    req.validate(&())?;

    registry
        .member_repository()
        .update(UpdateMember::from((member_id, req)))
        .await
        .map(MemberResponse::from)
        .map(Json)
}

pub async fn delete_member(
    State(registry): State<AppRegistry>,
    Path(member_id): Path<MemberId>,
) -> AppResult<StatusCode> {
    registry
        .member_repository()
        .delete(member_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn show_member_loans(
    State(registry): State<AppRegistry>,
    Path(member_id): Path<MemberId>,
) -> AppResult<Json<Vec<LoanResponse>>> {
    registry
        .loan_repository()
        .find_open_by_member_id(member_id)
        .await
        .map(|loans| loans.into_iter().map(LoanResponse::from).collect())
        .map(Json)
}
