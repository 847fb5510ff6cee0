//! Login request bodies checked by `validator` before a handler runs

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON body that has passed its `Validate` rules.
///
/// Anything serde cannot turn into `T` is `INVALID_BODY`. A rule failure,
/// such as a blank login, is `VALIDATION_ERROR` with per-field details.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Json::<T>::from_request(req, state)
            .await
            .map_err(body_rejection)?
            .0;

        body.validate()?;
        Ok(Self(body))
    }
}

fn body_rejection(rejection: JsonRejection) -> ApiError {
    let reason = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "login requests must be sent as application/json".to_string()
        }
        JsonRejection::JsonSyntaxError(_) => format!("malformed JSON: {}", rejection.body_text()),
        JsonRejection::JsonDataError(_) => {
            format!("unexpected login payload: {}", rejection.body_text())
        }
        _ => rejection.body_text(),
    };
    ApiError::invalid_body(reason)
}
