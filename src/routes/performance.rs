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
        performance::{
            CreatePerformanceReviewRequest, ListPerformanceReviewsQuery,
            UpdatePerformanceReviewRequest,
        },
    },
    services::{PerformanceService, clamp_page_bounds, context::RequestContext},
    validation::ValidatedJson,
};

pub async fn create_review(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    ValidatedJson(payload): ValidatedJson<CreatePerformanceReviewRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match PerformanceService::create(&mut conn, &ctx, &payload) {
        Ok(detail) => {
            tracing::info!(
                "Performance review created: {} for employee {}",
                detail.review.id,
                detail.review.employee_id
            );
            let response = ApiResponse::created(detail, "Performance review created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_review(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(review_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match PerformanceService::get(&mut conn, &ctx, review_id) {
        Ok(detail) => {
            let response = ApiResponse::success(detail, "Performance review retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn list_reviews(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Query(params): Query<ListPerformanceReviewsQuery>,
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

    match PerformanceService::list(
        &mut conn,
        &ctx,
        params.employee_id,
        params.reviewer_id,
        params.status,
        page,
        page_size,
    ) {
        Ok((reviews, total)) => {
            let response = ApiResponse::paginated(
                reviews,
                "Performance reviews retrieved successfully",
                page,
                page_size,
                total,
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_review(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(review_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdatePerformanceReviewRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match PerformanceService::update(&mut conn, &ctx, review_id, &payload) {
        Ok(review) => {
            let response = ApiResponse::success(review, "Performance review updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn delete_review(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(review_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match PerformanceService::delete(&mut conn, &ctx, review_id) {
        Ok(()) => {
            tracing::info!("Performance review deleted: {}", review_id);
            let response = ApiResponse::<()>::ok("Performance review deleted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn submit_review(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(review_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match PerformanceService::submit(&mut conn, &ctx, review_id) {
        Ok(review) => {
            tracing::info!("Performance review submitted: {}", review.id);
            let response = ApiResponse::success(review, "Performance review submitted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn finalize_review(
    State(state): State<AppState>,
    auth_employee: AuthEmployee,
    Path(review_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext::from(&auth_employee);

    match PerformanceService::finalize(&mut conn, &ctx, review_id) {
        Ok(review) => {
            tracing::info!("Performance review finalized: {}", review.id);
            let response = ApiResponse::success(review, "Performance review finalized successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
