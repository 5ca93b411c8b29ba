//! JSON body extractor with enveloped rejections.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use booking_core::error::AppError;

use crate::error::ApiError;

/// `axum::Json` with failures mapped into the standard `{error, message}`
/// body, so a malformed payload or an unknown enum value (e.g. a club
/// that does not exist) is rejected the same way validation is.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                Err(AppError::validation(format!("Invalid request body: {}", rejection.body_text())).into())
            }
        }
    }
}
