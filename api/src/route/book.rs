use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::book::{
    delete_book, register_book, reserve_book, show_available_books, show_book, show_book_list,
    update_book,
};

pub fn build_book_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_book_list).post(register_book))
        .route("/available", get(show_available_books))
        .route(
            "/:book_id",
            get(show_book).put(update_book).delete(delete_book),
        )
        .route("/:book_id/reservations", post(reserve_book));

    Router::new().nest("/books", routers)
}
