use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::{AppError, ErrorResponse};
use validator::Validate;

/// JSON body extractor that runs the payload's `Validate` rules before the handler sees it.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                tracing::debug!(error = %e, "Rejected malformed JSON body");
                let status = e.status();
                (
                    status,
                    Json(ErrorResponse {
                        detail: e.body_text(),
                    }),
                )
                    .into_response()
            })?;

        value.validate().map_err(|e| {
            tracing::debug!(error = %e, "Rejected invalid request body");
            AppError::ValidationError(e).into_response()
        })?;

        Ok(ValidatedJson(value))
    }
}
