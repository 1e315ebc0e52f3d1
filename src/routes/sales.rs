use axum::{
    routing::get,
    Router,
};
use crate::state::AppState;
use crate::handlers::sale;
use crate::middleware::auth::require_auth;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Every sales route requires a bearer token
        .route("/sales", get(sale::list_sales).post(sale::create_sale))
        .route("/sales/", get(sale::list_sales).post(sale::create_sale))
        .route(
            "/sales/{id}",
            get(sale::get_sale).put(sale::update_sale).delete(sale::delete_sale),
        )
        .route_layer(axum::middleware::from_fn_with_state(state, require_auth))
}
