use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{book::event::UpdateBook, id::BookId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    book::{BookResponse, CreateBookRequest, UpdateBookRequest},
    reservation::{CreateReservationRequest, ReservationResponse},
};

pub async fn register_book(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    req.validate(&())?;

    registry
        .book_repository()
        .create(req.into())
        .await
        .map(BookResponse::from)
        .map(|body| (StatusCode::CREATED, Json(body)))
}

pub async fn show_book_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookResponse>>> {
    registry
        .book_repository()
        .find_all()
        .await
        .map(|books| books.into_iter().map(BookResponse::from).collect())
        .map(Json)
}

pub async fn show_available_books(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookResponse>>> {
    registry
        .book_repository()
        .find_available()
        .await
        .map(|books| books.into_iter().map(BookResponse::from).collect())
        .map(Json)
}

pub async fn show_book(
    State(registry): State<AppRegistry>,
    Path(book_id): Path<BookId>,
) -> AppResult<Json<BookResponse>> {
    registry
        .book_repository()
        .find_by_id(book_id)
        .await?
        .map(BookResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound("book not found".into()))
}

pub async fn update_book(
    State(registry): State<AppRegistry>,
    Path(book_id): Path<BookId>,
    Json(req): Json<UpdateBookRequest>,
) -> AppResult<Json<BookResponse>> {
    req.validate(&())?;

    registry
        .book_repository()
        .update(UpdateBook::from((book_id, req)))
        .await
        .map(BookResponse::from)
        .map(Json)
}

pub async fn delete_book(
    State(registry): State<AppRegistry>,
    Path(book_id): Path<BookId>,
) -> AppResult<StatusCode> {
    registry
        .book_repository()
        .delete(book_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

// 予約は貸出エンジンを経由する。蔵書ステータスの再計算を伴うため
pub async fn reserve_book(
    State(registry): State<AppRegistry>,
    Path(book_id): Path<BookId>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    registry
        .lending()
        .reserve(req.member_id, book_id)
        .await
        .map(ReservationResponse::from)
        .map(|body| (StatusCode::CREATED, Json(body)))
}
