use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::{FineId, MemberId};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::fine::{FineResponse, PaidFineResponse};

pub async fn show_fine_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<FineResponse>>> {
    registry
        .fine_repository()
        .find_all()
        .await
        .map(|fines| fines.into_iter().map(FineResponse::from).collect())
        .map(Json)
}

pub async fn show_unpaid_fines_for_member(
    State(registry): State<AppRegistry>,
    Path(member_id): Path<MemberId>,
) -> AppResult<Json<Vec<FineResponse>>> {
    registry
        .fine_repository()
        .find_unpaid_by_member_id(member_id)
        .await
        .map(|fines| fines.into_iter().map(FineResponse::from).collect())
        .map(Json)
}

pub async fn pay_fine(
    State(registry): State<AppRegistry>,
    Path(fine_id): Path<FineId>,
) -> AppResult<Json<PaidFineResponse>> {
    registry
        .lending()
        .pay_fine(fine_id)
        .await
        .map(PaidFineResponse::from)
        .map(Json)
}
