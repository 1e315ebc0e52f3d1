// src/handlers/sale.rs
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use tracing::{debug, info, instrument, Span};

use crate::dtos::sale::SalePayload;
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::sale::Sale;
use crate::state::AppState;

fn sale_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    let Path(id) = path?;
    Span::current().record("id", id);
    Ok(id)
}

fn not_found(id: i32) -> AppError {
    debug!(id, "Sale not found");
    AppError::not_found(format!("Sale {id} not found"))
}

// GET /sales - List all sales
#[utoipa::path(
    get,
    path = "/sales",
    tag = "sales",
    responses(
        (status = 200, description = "Every stored sale", body = Vec<Sale>),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
#[instrument(skip(state))]
pub async fn list_sales(State(state): State<AppState>) -> Json<Vec<Sale>> {
    Json(state.store.list_all())
}

// POST /sales - Create a sale
#[utoipa::path(
    post,
    path = "/sales",
    tag = "sales",
    request_body = SalePayload,
    responses(
        (status = 201, description = "Sale created", body = Sale,
            headers(("Location" = String, description = "Path of the new sale"))),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
#[instrument(skip_all, fields(subject = %auth.subject))]
pub async fn create_sale(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Result<Json<SalePayload>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Sale>), AppError> {
    let Json(payload) = payload?;
    let sale = state.store.insert(payload.into())?;
    info!(id = sale.id, total = sale.total, "Sale created");

    let location = format!("/sales/{}", sale.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(sale)))
}

// GET /sales/{id} - Fetch one sale
#[utoipa::path(
    get,
    path = "/sales/{id}",
    tag = "sales",
    params(("id" = i32, Path, description = "Sale id")),
    responses(
        (status = 200, description = "The sale", body = Sale),
        (status = 400, description = "Id is not an integer"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "No sale with this id")
    )
)]
#[instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn get_sale(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Sale>, AppError> {
    let id = sale_id(id)?;
    let sale = state.store.find_by_id(id).ok_or_else(|| not_found(id))?;
    Ok(Json(sale))
}

// PUT /sales/{id} - Replace customer name and total
#[utoipa::path(
    put,
    path = "/sales/{id}",
    tag = "sales",
    params(("id" = i32, Path, description = "Sale id")),
    request_body = SalePayload,
    responses(
        (status = 204, description = "Sale updated"),
        (status = 400, description = "Malformed id or body"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "No sale with this id")
    )
)]
#[instrument(skip_all, fields(subject = %auth.subject, id = tracing::field::Empty))]
pub async fn update_sale(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SalePayload>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = sale_id(id)?;
    let Json(payload) = payload?;
    if let Some(body_id) = payload.id.filter(|body_id| *body_id != id) {
        debug!(body_id, "Ignoring id in request body");
    }

    let sale = state
        .store
        .update(id, payload.into())
        .ok_or_else(|| not_found(id))?;
    info!(total = sale.total, "Sale updated");

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /sales/{id} - Remove a sale
#[utoipa::path(
    delete,
    path = "/sales/{id}",
    tag = "sales",
    params(("id" = i32, Path, description = "Sale id")),
    responses(
        (status = 200, description = "The deleted sale", body = Sale),
        (status = 400, description = "Id is not an integer"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "No sale with this id")
    )
)]
#[instrument(skip_all, fields(subject = %auth.subject, id = tracing::field::Empty))]
pub async fn delete_sale(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Sale>, AppError> {
    let id = sale_id(id)?;
    let sale = state.store.remove(id).ok_or_else(|| not_found(id))?;
    info!("Sale deleted");
    Ok(Json(sale))
}
