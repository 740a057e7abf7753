mod extract;
mod form;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Query};
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::error::{AppError, StoreError};
use crate::models::*;
use crate::state::AppState;
use crate::upload::{UploadRequest, dispatch_upload};
use crate::validation::{self, LoginRequest};

pub use extract::{ApiJson, ApiPath};
pub use form::{LectureForm, UploadedFile};

#[derive(Deserialize)]
struct CourseQueryParams {
    #[serde(default)]
    q: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/{id}", get(get_course))
        .route("/courses/{id}/available-numbers", get(available_numbers))
        .route("/courses/{id}/lectures", post(create_lecture))
        .route("/courses/{id}/lectures/{lecture_id}", get(get_lecture))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn login(ApiJson(req): ApiJson<LoginRequest>) -> Result<StatusCode, AppError> {
    validation::validate_login(&req)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>
) -> Json<Vec<Course>> {
    let store = state.store.lock().await;
    Json(store.search(&params.q).into_iter().cloned().collect())
}

async fn create_course(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewCourseRequest>
) -> Result<Json<Course>, AppError> {
    validation::validate_new_course(&req)?;
    let course = state
        .store
        .lock()
        .await
        .add_course(req.code, req.title, req.instructor);
    Ok(Json(course))
}

async fn get_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CourseId>,
) -> Result<Json<Course>, AppError> {
    let store = state.store.lock().await;
    let course = store.course(id).ok_or(StoreError::CourseNotFound(id))?;
    Ok(Json(course.clone()))
}

async fn available_numbers(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CourseId>,
) -> Result<Json<Vec<u32>>, AppError> {
    let store = state.store.lock().await;
    let course = store.course(id).ok_or(StoreError::CourseNotFound(id))?;
    Ok(Json(course.available_lecture_numbers()))
}

async fn create_lecture(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CourseId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Lecture>, AppError> {
    let LectureForm { request: req, first_file } = LectureForm::read(multipart?).await?;

    let (lecture, subject_id) = {
        let mut store = state.store.lock().await;
        let course = store.course(id).ok_or(StoreError::CourseNotFound(id))?;
        validation::validate_new_lecture(course, &req)?;

        let lecture = store.add_lecture(id, req.number, req.title.clone(), &req.files)?;
        let subject_id = store.subject_id(id).ok_or(StoreError::CourseNotFound(id))?;
        (lecture, subject_id)
    };

    if let Some(UploadedFile { file, bytes }) = first_file {
        dispatch_upload(
            state.uploader.clone(),
            UploadRequest {
                subject_id,
                title: req.title,
                file_name: file.file_name(),
                bytes,
            },
        );
    }

    Ok(Json(lecture))
}

async fn get_lecture(
    State(state): State<AppState>,
    ApiPath((id, lecture_id)): ApiPath<(CourseId, LectureId)>,
) -> Result<Json<Lecture>, AppError> {
    let store = state.store.lock().await;
    let lecture = store.lecture(id, lecture_id)?;
    Ok(Json(lecture.clone()))
}
