use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use bcrypt::verify;
use std::time::Instant;
use tokio::task;

use crate::{
    AppState,
    db::{
        enums::EmployeeStatus,
        models::{
            api::ApiResponse,
            auth::{ChangePasswordRequest, LoginRequest, LoginResponse, RefreshTokenRequest},
            employee::Employee,
        },
        repositories::employees::EmployeeRepo,
    },
    services::{EmployeesService, context::RequestContext},
    validation::ValidatedJson,
};
use axum::TypedHeader;
use headers::Authorization;
use headers::authorization::Bearer;

use crate::db::models::auth::AuthEmployee;

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> impl IntoResponse {
    let start_time = Instant::now();

    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let employee: Employee = match EmployeeRepo::find_by_email(&mut conn, &payload.email) {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            tracing::warn!(
                "Login failed - no employee for email: {} (elapsed: {:?})",
                payload.email,
                start_time.elapsed()
            );
            let response = ApiResponse::<()>::unauthorized("Invalid email or password");
            return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
        }
        Err(e) => {
            tracing::error!("Login database error: {}", e);
            let response = ApiResponse::<()>::internal_error("Database error");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    // bcrypt verification is CPU-bound; keep it off the async workers.
    let password_start = Instant::now();
    let password = payload.password.clone();
    let stored_hash = employee.password_hash.clone();
    let is_valid = match task::spawn_blocking(move || verify(password.as_bytes(), &stored_hash))
        .await
    {
        Ok(Ok(valid)) => valid,
        Ok(Err(e)) => {
            tracing::error!(
                "Password verification failed: {} (elapsed: {:?})",
                e,
                start_time.elapsed()
            );
            let response = ApiResponse::<()>::internal_error("Password verification failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
        Err(e) => {
            tracing::error!(
                "Password verification task failed: {} (elapsed: {:?})",
                e,
                start_time.elapsed()
            );
            let response = ApiResponse::<()>::internal_error("Password verification failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    if !is_valid {
        tracing::warn!(
            "Login failed - invalid password for email: {} (password check: {:?})",
            payload.email,
            password_start.elapsed()
        );
        let response = ApiResponse::<()>::unauthorized("Invalid email or password");
        return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
    }

    if employee.status != EmployeeStatus::Active {
        tracing::warn!(
            "Login rejected - account not active: {} (status: {:?})",
            payload.email,
            employee.status
        );
        let response = ApiResponse::<()>::unauthorized("Account is not active");
        return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
    }

    // Bookkeeping only; a failed stamp must not block the login.
    if let Err(e) = EmployeeRepo::update_last_login(&mut conn, employee.id, chrono::Utc::now()) {
        tracing::warn!("Failed to record login timestamp for {}: {}", employee.id, e);
    }

    let access_token = match state.auth_service.generate_access_token(&employee) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to generate access token: {}", e);
            let response = ApiResponse::<()>::internal_error("Failed to generate access token");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let refresh_token = match state.auth_service.generate_refresh_token(employee.id) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to generate refresh token: {}", e);
            let response = ApiResponse::<()>::internal_error("Failed to generate refresh token");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    tracing::info!(
        "Login successful for employee: {} (total: {:?})",
        payload.email,
        start_time.elapsed()
    );

    let login_data = LoginResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth_service.access_token_expires_in(),
        employee,
    };

    let response = ApiResponse::success(login_data, "Login successful");
    (StatusCode::OK, Json(response)).into_response()
}

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let refresh_claims = match state.auth_service.verify_refresh_token(&payload.refresh_token) {
        Ok(claims) => claims,
        Err(_) => {
            let response = ApiResponse::<()>::unauthorized("Invalid or expired refresh token");
            return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
        }
    };

    let employee: Employee = match EmployeeRepo::find_by_id(&mut conn, refresh_claims.sub) {
        Ok(Some(employee)) if employee.status == EmployeeStatus::Active => employee,
        Ok(_) => {
            let response = ApiResponse::<()>::unauthorized("Employee not found or inactive");
            return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
        }
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database error");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let new_access_token = match state.auth_service.generate_access_token(&employee) {
        Ok(token) => token,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Failed to generate access token");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let new_refresh_token = match state.auth_service.generate_refresh_token(employee.id) {
        Ok(token) => token,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Failed to generate refresh token");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let refresh_data = LoginResponse {
        access_token: new_access_token,
        refresh_token: new_refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth_service.access_token_expires_in(),
        employee,
    };

    let response = ApiResponse::success(refresh_data, "Token refreshed successfully");
    (StatusCode::OK, Json(response)).into_response()
}

pub async fn get_profile(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let claims = match state.auth_service.verify_token(bearer.token()) {
        Ok(claims) => claims,
        Err(_) => {
            let response = ApiResponse::<()>::unauthorized("Invalid or expired access token");
            return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
        }
    };

    let employee: Employee = match EmployeeRepo::find_by_id(&mut conn, claims.sub) {
        Ok(Some(employee)) if employee.status == EmployeeStatus::Active => employee,
        Ok(_) => {
            let response = ApiResponse::<()>::unauthorized("Employee not found or inactive");
            return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
        }
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database error");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let response = ApiResponse::success(employee, "Profile retrieved successfully");
    (StatusCode::OK, Json(response)).into_response()
}

pub async fn change_password(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match EmployeesService::change_password(
        &mut conn,
        &ctx,
        &payload.current_password,
        &payload.new_password,
        state.config.bcrypt_cost,
    ) {
        Ok(()) => {
            tracing::info!("Password changed for employee: {}", ctx.employee_id);
            let response = ApiResponse::<()>::ok("Password changed successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
