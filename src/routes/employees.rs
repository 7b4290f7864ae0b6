use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    AppState,
    db::models::{
        api::ApiResponse,
        auth::AuthEmployee,
        employee::{CreateEmployeeRequest, ListEmployeesQuery, UpdateEmployeeRequest},
    },
    services::{EmployeesService, clamp_page_bounds, context::RequestContext},
    validation::ValidatedJson,
};

pub async fn create_employee(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match EmployeesService::create(&mut conn, &ctx, &payload, state.config.bcrypt_cost) {
        Ok(employee) => {
            tracing::info!(
                "Employee created: {} ({})",
                employee.employee_code,
                employee.id
            );
            let response = ApiResponse::created(employee, "Employee created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_employee(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(employee_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match EmployeesService::get(&mut conn, &ctx, employee_id) {
        Ok(employee) => {
            let response = ApiResponse::success(employee, "Employee retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn list_employees(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Query(params): Query<ListEmployeesQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);
    let (page, page_size) = clamp_page_bounds(params.page, params.page_size);

    match EmployeesService::list(
        &mut conn,
        &ctx,
        params.search.as_deref(),
        params.department_id,
        params.status,
        page,
        page_size,
    ) {
        Ok((employees, total)) => {
            let response = ApiResponse::paginated(
                employees,
                "Employees retrieved successfully",
                page,
                page_size,
                total,
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_employee(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(employee_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match EmployeesService::update(&mut conn, &ctx, employee_id, &payload) {
        Ok(employee) => {
            let response = ApiResponse::success(employee, "Employee updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn delete_employee(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(employee_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match EmployeesService::delete(&mut conn, &ctx, employee_id) {
        Ok(()) => {
            tracing::info!("Employee deleted: {}", employee_id);
            let response = ApiResponse::<()>::ok("Employee deleted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Employees eligible to approve leave or own a department.
pub async fn get_managers(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match EmployeesService::managers(&mut conn, &ctx) {
        Ok(managers) => {
            let response = ApiResponse::success(managers, "Managers retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
