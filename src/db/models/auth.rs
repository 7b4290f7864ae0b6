use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::EmployeeRole;
use crate::db::models::employee::Employee;
use crate::validation::rules::validate_password_strength;

/// Identity established by the authentication middleware, built from
/// verified token claims and stored in request extensions.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthEmployee {
    pub id: Uuid,
    pub employee_code: String,
    pub email: String,
    pub role: EmployeeRole,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthEmployee
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(auth_employee) = parts.extensions.get::<AuthEmployee>() {
            Ok(auth_employee.clone())
        } else {
            Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()))
        }
    }
}

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub employee: Employee,
}

#[derive(Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(custom(function = "validate_password_strength"))]
    pub new_password: String,
}
