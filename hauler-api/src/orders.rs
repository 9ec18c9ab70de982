use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use hauler_core::{LocationSpec, NewOrder, Order, OrderError, OrderView};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub from_location: LocationSpec,
    pub to_location: LocationSpec,
}

#[derive(Debug, Serialize)]
pub struct StatusChangeResponse {
    pub id: i64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/orders", post(create_order))
        .route("/v1/orders/not-approved", get(not_approved_orders))
        .route("/v1/orders/user/{user_id}", get(user_orders))
        .route("/v1/orders/{id}", get(get_order).put(update_order))
        .route("/v1/orders/{id}/approve", put(approve_order))
        .route("/v1/orders/{id}/decline", put(decline_order))
}

/// POST /v1/orders
async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<NewOrder>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state.orchestrator.create_order(req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /v1/orders/not-approved
async fn not_approved_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    Ok(Json(state.orchestrator.not_approved_orders().await?))
}

/// GET /v1/orders/user/{user_id}
async fn user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    Ok(Json(state.orchestrator.user_orders(user_id).await?))
}

/// GET /v1/orders/{id}
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OrderView>, ApiError> {
    match state.orchestrator.get_order(id).await? {
        Some(view) => Ok(Json(view)),
        None => Err(OrderError::NotFound(id).into()),
    }
}

/// PUT /v1/orders/{id}
async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<Json<Order>, ApiError> {
    let order = state
        .orchestrator
        .update_order(id, req.from_location, req.to_location)
        .await?;
    Ok(Json(order))
}

/// PUT /v1/orders/{id}/approve
async fn approve_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StatusChangeResponse>, ApiError> {
    let id = state.orchestrator.approve_order(id).await?;
    Ok(Json(StatusChangeResponse { id }))
}

/// PUT /v1/orders/{id}/decline
async fn decline_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StatusChangeResponse>, ApiError> {
    let id = state.orchestrator.decline_order(id).await?;
    Ok(Json(StatusChangeResponse { id }))
}
