use axum::Router;
use registry::AppRegistry;

use super::{
    book::build_book_routers, fine::build_fine_routers, health::build_health_check_routers,
    loan::build_loan_routers, member::build_member_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let routers = Router::new()
        .merge(build_health_check_routers())
        .merge(build_book_routers())
        .merge(build_member_routers())
        .merge(build_loan_routers())
        .merge(build_fine_routers());

    Router::new().nest("/api/v1", routers)
}
