use axum::Json;

use crate::dtos::StatusMessage;

pub const RUNNING_MESSAGE: &str = "Forevergreen Homes and Gardens Backend is running";

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Backend is running", body = StatusMessage)
    ),
    tag = "Observability"
)]
pub async fn read_root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: RUNNING_MESSAGE.to_string(),
    })
}
