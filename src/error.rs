use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::models::{CourseId, LectureId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),

    #[error("lecture {lecture_id} not found in course {course_id}")]
    LectureNotFound {
        course_id: CourseId,
        lecture_id: LectureId,
    },

    #[error("lecture number {number} already exists in course {course_id}")]
    DuplicateLectureNumber { course_id: CourseId, number: u32 },

    #[error("lecture number must be positive, got {0}")]
    InvalidLectureNumber(u32),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        warn!("store rejected request: {}", err);
        match err {
            StoreError::CourseNotFound(_) | StoreError::LectureNotFound { .. } => {
                AppError::NotFound(err.to_string())
            }
            StoreError::DuplicateLectureNumber { .. } => AppError::Conflict(err.to_string()),
            StoreError::InvalidLectureNumber(_) => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
