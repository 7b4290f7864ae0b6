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
        leave::{
            ApproveLeaveRequest, CreateLeaveRequest, LeaveBalanceQuery, ListLeavesQuery,
            ProvisionLeaveBalanceRequest, RejectLeaveRequest, UpdateLeaveRequest,
        },
    },
    services::{LeavesService, clamp_page_bounds, context::RequestContext},
    validation::ValidatedJson,
};

pub async fn create_leave(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    ValidatedJson(payload): ValidatedJson<CreateLeaveRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match LeavesService::create(&mut conn, &ctx, &payload) {
        Ok(leave) => {
            tracing::info!(
                "Leave request created: {} for employee {}",
                leave.id,
                leave.employee_id
            );
            let response = ApiResponse::created(leave, "Leave request created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_leave(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(leave_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match LeavesService::get(&mut conn, &ctx, leave_id) {
        Ok(leave) => {
            let response = ApiResponse::success(leave, "Leave request retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn list_leaves(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Query(params): Query<ListLeavesQuery>,
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

    match LeavesService::list(
        &mut conn,
        &ctx,
        params.employee_id,
        params.status,
        params.leave_type,
        page,
        page_size,
    ) {
        Ok((leaves, total)) => {
            let response = ApiResponse::paginated(
                leaves,
                "Leave requests retrieved successfully",
                page,
                page_size,
                total,
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_leave(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(leave_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateLeaveRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match LeavesService::update(&mut conn, &ctx, leave_id, &payload) {
        Ok(leave) => {
            let response = ApiResponse::success(leave, "Leave request updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn delete_leave(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(leave_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match LeavesService::delete(&mut conn, &ctx, leave_id) {
        Ok(()) => {
            tracing::info!("Leave request cancelled: {}", leave_id);
            let response = ApiResponse::<()>::ok("Leave request cancelled successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn approve_leave(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(leave_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ApproveLeaveRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match LeavesService::approve(&mut conn, &ctx, leave_id, payload.comments) {
        Ok(leave) => {
            tracing::info!(
                "Leave request approved: {} by {}",
                leave.id,
                ctx.employee_id
            );
            let response = ApiResponse::success(leave, "Leave request approved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn reject_leave(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(leave_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<RejectLeaveRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match LeavesService::reject(&mut conn, &ctx, leave_id, payload.comments) {
        Ok(leave) => {
            tracing::info!(
                "Leave request rejected: {} by {}",
                leave.id,
                ctx.employee_id
            );
            let response = ApiResponse::success(leave, "Leave request rejected successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_leave_balances(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(employee_id): Path<Uuid>,
    Query(params): Query<LeaveBalanceQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match LeavesService::get_balance(&mut conn, &ctx, employee_id, params.year) {
        Ok(balances) => {
            let response = ApiResponse::success(balances, "Leave balances retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn provision_leave_balance(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    ValidatedJson(payload): ValidatedJson<ProvisionLeaveBalanceRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match LeavesService::provision_balance(&mut conn, &ctx, &payload) {
        Ok(balance) => {
            tracing::info!(
                "Leave balance provisioned for employee {} ({:?}, {})",
                payload.employee_id,
                payload.leave_type,
                payload.year
            );
            let response = ApiResponse::created(balance, "Leave balance provisioned successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
