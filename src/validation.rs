//! Form checks that run before the store is touched.

use serde::Deserialize;

use crate::error::AppError;
use crate::models::course::MAX_LECTURE_NUMBER;
use crate::models::{Course, NewCourseRequest, NewLectureRequest};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Any pair of non-blank values is accepted.
pub fn validate_login(req: &LoginRequest) -> Result<(), AppError> {
    if is_blank(&req.username) || is_blank(&req.password) {
        return Err(AppError::BadRequest(
            "Please enter both username and password".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_new_course(req: &NewCourseRequest) -> Result<(), AppError> {
    if is_blank(&req.code) || is_blank(&req.title) || is_blank(&req.instructor) {
        return Err(AppError::BadRequest("Please fill in all fields".to_string()));
    }
    Ok(())
}

pub fn validate_new_lecture(course: &Course, req: &NewLectureRequest) -> Result<(), AppError> {
    if is_blank(&req.title) {
        return Err(AppError::BadRequest("Lecture title is required".to_string()));
    }
    if req.files.is_empty() {
        return Err(AppError::BadRequest("Select at least one file".to_string()));
    }
    if !(1..=MAX_LECTURE_NUMBER).contains(&req.number) {
        return Err(AppError::BadRequest(format!(
            "Lecture number must be between 1 and {MAX_LECTURE_NUMBER}"
        )));
    }
    if course.has_lecture_number(req.number) {
        return Err(AppError::Conflict(format!(
            "Lecture {} already exists in {}",
            req.number, course.code
        )));
    }
    Ok(())
}
