// ================
// crates/backend-lib/src/messages.rs
// ================
//! Request and response payloads for the HTTP surface.
use serde::{Deserialize, Serialize};

use crate::auth::Role;
use crate::catalog::{Course, CourseSummary};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub status: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    #[serde(rename = "courseId")]
    pub course_id: String,
    pub course: Course,
}
