pub mod auth;
pub mod departments;
pub mod employees;
pub mod leaves;
pub mod performance;

use crate::AppState;
use crate::middleware::auth::auth_middleware;
use crate::middleware::recovery::recovery_middleware;
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post, put},
};

/// Assembles the full API router: the login/refresh pair stays outside the
/// authentication layer, everything else requires a verified bearer token.
/// Panic recovery sits innermost so it wraps handler execution directly.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .layer(from_fn(recovery_middleware))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/auth/profile", get(auth::get_profile))
        .route("/auth/change-password", post(auth::change_password))
        .route("/employees", post(employees::create_employee))
        .route("/employees", get(employees::list_employees))
        .route("/employees/managers", get(employees::get_managers))
        .route("/employees/:employee_id", get(employees::get_employee))
        .route("/employees/:employee_id", put(employees::update_employee))
        .route("/employees/:employee_id", delete(employees::delete_employee))
        .route(
            "/employees/:employee_id/leave-balances",
            get(leaves::get_leave_balances),
        )
        .route("/departments", post(departments::create_department))
        .route("/departments", get(departments::list_departments))
        .route(
            "/departments/:department_id",
            get(departments::get_department),
        )
        .route(
            "/departments/:department_id",
            put(departments::update_department),
        )
        .route(
            "/departments/:department_id",
            delete(departments::delete_department),
        )
        .route("/leaves", post(leaves::create_leave))
        .route("/leaves", get(leaves::list_leaves))
        .route("/leaves/:leave_id", get(leaves::get_leave))
        .route("/leaves/:leave_id", put(leaves::update_leave))
        .route("/leaves/:leave_id", delete(leaves::delete_leave))
        .route("/leaves/:leave_id/approve", post(leaves::approve_leave))
        .route("/leaves/:leave_id/reject", post(leaves::reject_leave))
        .route("/leave-balances", post(leaves::provision_leave_balance))
        .route("/performance-reviews", post(performance::create_review))
        .route("/performance-reviews", get(performance::list_reviews))
        .route("/performance-reviews/:review_id", get(performance::get_review))
        .route(
            "/performance-reviews/:review_id",
            put(performance::update_review),
        )
        .route(
            "/performance-reviews/:review_id",
            delete(performance::delete_review),
        )
        .route(
            "/performance-reviews/:review_id/submit",
            post(performance::submit_review),
        )
        .route(
            "/performance-reviews/:review_id/finalize",
            post(performance::finalize_review),
        )
        .layer(from_fn(recovery_middleware))
        .layer(from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state);

    public_routes.merge(protected_routes)
}
