use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

/// Failures raised by the habit store and its storage backend.
#[derive(Debug, Error)]
pub enum HabitError {
    #[error("habit index {index} is out of range (expected 0..{count})")]
    OutOfRange { index: usize, count: usize },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("failed to serialize habit record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        error!("request failed: {err}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<HabitError> for AppError {
    fn from(err: HabitError) -> Self {
        match err {
            HabitError::OutOfRange { .. } | HabitError::InvalidDate(_) => {
                Self::bad_request(err.to_string())
            }
            HabitError::Serialize(_) | HabitError::Storage(_) => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_map_to_bad_request() {
        let err: AppError = HabitError::OutOfRange { index: 9, count: 7 }.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("9"));

        let err: AppError = HabitError::InvalidDate("nope".into()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_errors_map_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: AppError = HabitError::Storage(io).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
