use crate::error::AppError;
use axum::{http::Request, middleware::Next, response::IntoResponse, response::Response};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tracing::error;

/// Converts a panicking handler into a 500 response instead of tearing
/// down the connection task.
pub async fn recovery_middleware<B>(request: Request<B>, next: Next<B>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());

            error!(
                method = %method,
                path = %path,
                panic = %detail,
                "Handler panicked"
            );

            AppError::internal("Internal server error").into_response()
        }
    }
}
