use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::{
    dtos::{ContactInquiry, ContactResponse},
    services::to_document,
    utils::ValidatedJson,
    AppState,
};

pub const DATABASE_UNAVAILABLE: &str =
    "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables";

/// Submit a contact inquiry
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactInquiry,
    responses(
        (status = 200, description = "Inquiry stored", body = ContactResponse),
        (status = 400, description = "Malformed JSON body", body = crate::dtos::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Inquiry could not be stored", body = crate::dtos::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(inquiry): ValidatedJson<ContactInquiry>,
) -> Result<Json<ContactResponse>, AppError> {
    let store = state.store.as_ref().ok_or_else(|| {
        tracing::error!("Contact inquiry received but no database is configured");
        AppError::DatabaseError(anyhow::anyhow!(DATABASE_UNAVAILABLE))
    })?;

    let document = to_document(&inquiry)?;
    let id = store
        .create_document(ContactInquiry::COLLECTION, document)
        .await?;

    tracing::info!(inquiry_id = %id, "Stored contact inquiry");

    Ok(Json(ContactResponse::success(id)))
}
