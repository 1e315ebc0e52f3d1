pub mod sales;

use axum::{routing::get, Router};
use crate::handlers::root;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(root::hello))
        .merge(sales::routes(state))
}
