use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::types::AttendanceKind;

/// Service error variants. Messages are part of the wire contract: failures
/// are returned as `{"error": "<message>"}` with the mapped status code.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Required request fields are absent; message names them per endpoint.
    #[error("{0}")]
    MissingInput(String),
    #[error("User not found")]
    UserNotFound,
    #[error("{0}")]
    InvalidCredential(&'static str),
    /// Wrong, expired, and never-issued codes are deliberately
    /// indistinguishable to the caller.
    #[error("Invalid or expired code")]
    InvalidOrExpiredCode,
    #[error("You are outside the allowed {0} area")]
    OutOfRange(AttendanceKind),
    #[error("No notifications found")]
    NoNotifications,
    #[error("Notification not found")]
    NotificationNotFound,
    #[error("Office location not found")]
    OfficeLocationNotFound,
    #[error("Office location configuration not found")]
    ConfigurationMissing,
    #[error("Failed to deliver 2FA code")]
    Delivery(#[source] anyhow::Error),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingInput(_) => "MISSING_INPUT",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidCredential(_) => "INVALID_CREDENTIAL",
            Self::InvalidOrExpiredCode => "INVALID_OR_EXPIRED_CODE",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
            Self::NoNotifications => "NO_NOTIFICATIONS",
            Self::NotificationNotFound => "NOTIFICATION_NOT_FOUND",
            Self::OfficeLocationNotFound => "OFFICE_LOCATION_NOT_FOUND",
            Self::ConfigurationMissing => "CONFIGURATION_MISSING",
            Self::Delivery(_) => "DELIVERY_FAILURE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingInput(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound
            | Self::NoNotifications
            | Self::NotificationNotFound
            | Self::OfficeLocationNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredential(_) | Self::InvalidOrExpiredCode => StatusCode::UNAUTHORIZED,
            Self::OutOfRange(_) => StatusCode::FORBIDDEN,
            Self::ConfigurationMissing | Self::Delivery(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        match &self {
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            Self::Delivery(e) => {
                tracing::error!(error = %e, kind = "DELIVERY_FAILURE", "2fa code delivery failed");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
