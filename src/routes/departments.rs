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
        department::{CreateDepartmentRequest, ListDepartmentsQuery, UpdateDepartmentRequest},
    },
    services::{DepartmentsService, clamp_page_bounds, context::RequestContext},
    validation::ValidatedJson,
};

pub async fn create_department(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    ValidatedJson(payload): ValidatedJson<CreateDepartmentRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match DepartmentsService::create(&mut conn, &ctx, &payload) {
        Ok(department) => {
            tracing::info!("Department created: {} ({})", department.name, department.id);
            let response = ApiResponse::created(department, "Department created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_department(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(department_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match DepartmentsService::get(&mut conn, &ctx, department_id) {
        Ok(department) => {
            let response = ApiResponse::success(department, "Department retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn list_departments(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Query(params): Query<ListDepartmentsQuery>,
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

    match DepartmentsService::list(&mut conn, &ctx, params.search.as_deref(), page, page_size) {
        Ok((departments, total)) => {
            let response = ApiResponse::paginated(
                departments,
                "Departments retrieved successfully",
                page,
                page_size,
                total,
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_department(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(department_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateDepartmentRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match DepartmentsService::update(&mut conn, &ctx, department_id, &payload) {
        Ok(department) => {
            let response = ApiResponse::success(department, "Department updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn delete_department(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(department_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match DepartmentsService::delete(&mut conn, &ctx, department_id) {
        Ok(()) => {
            tracing::info!("Department deleted: {}", department_id);
            let response = ApiResponse::<()>::ok("Department deleted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
