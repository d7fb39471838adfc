use crate::{
    domain::responses::{ApiResponse, Empty},
    errors::service::ServiceError,
    utils::RequestContext,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use tracing::{error, warn};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HttpError::BadRequest(msg)
            | HttpError::NotFound(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::Internal(msg) => msg,
        }
    }

    /// On the create path a missing customer or product is a bad reference
    /// in the request body, not a missing resource.
    pub fn from_reference(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HttpError::BadRequest(msg),
            other => HttpError::from(other),
        }
    }

    fn into_envelope(self, message: String, elapsed: Duration) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("❌ {message}");
        } else {
            warn!("⚠️ {message}");
        }

        let body = ApiResponse::new(message, elapsed, Empty::default());
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(_) | ServiceError::UpstreamUnavailable(_) => {
                HttpError::BadRequest(err.to_string())
            }
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            ServiceError::Persistence(_) => HttpError::Internal(err.to_string()),
            ServiceError::Cancelled(_) => HttpError::ServiceUnavailable(err.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let message = self.message().to_string();
        self.into_envelope(message, Duration::ZERO)
    }
}

/// An `HttpError` bound to the request it failed, rendered as
/// `Error on <action>: <reason>` inside the standard envelope.
#[derive(Debug)]
pub struct ApiError {
    action: String,
    elapsed: Duration,
    error: HttpError,
}

impl ApiError {
    pub fn new(ctx: &RequestContext, action: &str, error: impl Into<HttpError>) -> Self {
        Self {
            action: action.to_string(),
            elapsed: ctx.elapsed(),
            error: error.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.error.status()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = format!("Error on {}: {}", self.action, self.error.message());
        self.error.into_envelope(message, self.elapsed)
    }
}
