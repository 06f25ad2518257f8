// ============================
// crates/backend-lib/src/handlers/catalog.rs
// ============================
//! Handlers for the read-only course catalog.
use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppError;
use crate::messages::{CourseListResponse, CourseResponse};
use crate::AppState;

pub async fn list_courses(
    State(state): State<AppState>,
) -> Json<CourseListResponse> {
    Json(CourseListResponse {
        courses: state.catalog.list_courses(),
    })
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = state
        .catalog
        .get_course(&course_id)
        .ok_or_else(|| AppError::NotFound(format!("course {course_id}")))?;

    Ok(Json(CourseResponse {
        course_id,
        course: course.clone(),
    }))
}
