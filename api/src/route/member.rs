use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::member::{
    delete_member, register_member, show_member, show_member_list, show_member_loans,
    update_member,
};

pub fn build_member_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_member_list).post(register_member))
        .route(
            "/:member_id",
            get(show_member).put(update_member).delete(delete_member),
        )
        .route("/:member_id/loans", get(show_member_loans));

    Router::new().nest("/members", routers)
}
