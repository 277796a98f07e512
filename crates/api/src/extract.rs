//! Typed, validated form bodies.

use axum::extract::{FromRequest, Request};
use axum::Form;
use inventario_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// A URL-encoded form body deserialized into `T` and checked with
/// [`Validate`] before the handler runs.
///
/// Missing fields, non-integer quantities and failed validation rules are all
/// rejected with `400 VALIDATION_ERROR`.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(errors.to_string())))?;

        Ok(Self(value))
    }
}
