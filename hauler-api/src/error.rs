use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hauler_core::OrderError;

#[derive(Debug)]
pub struct ApiError(OrderError);

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            OrderError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("order {} not found", id) }),
            ),
            OrderError::InvalidTransition { from, to } => (
                StatusCode::CONFLICT,
                json!({
                    "error": format!("invalid status transition from {} to {}", from, to),
                }),
            ),
            // The order exists despite the failed call; the caller needs its
            // id to inspect or repair state.
            OrderError::PartialCreation {
                order_id,
                failed_index,
                source,
            } => {
                tracing::error!(order_id, failed_index, %source, "cargo registration failed after order insert");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "order was created but cargo registration failed",
                        "order_id": order_id,
                        "failed_cargo_index": failed_index,
                    }),
                )
            }
            OrderError::Collaborator { stage, source } => {
                tracing::error!(%stage, %source, "collaborator call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": format!("{} failed", stage) }),
                )
            }
            OrderError::Storage(source) => {
                tracing::error!(%source, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
