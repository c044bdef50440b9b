use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::fine::{pay_fine, show_fine_list, show_unpaid_fines_for_member};

pub fn build_fine_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_fine_list))
        .route("/member/:member_id", get(show_unpaid_fines_for_member))
        .route("/:fine_id/pay", post(pay_fine));

    Router::new().nest("/fines", routers)
}
