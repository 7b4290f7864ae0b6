pub mod auth;
pub mod recovery;
pub mod request_tracking;

pub use auth::{AuthService, auth_middleware};
pub use recovery::recovery_middleware;
pub use request_tracking::{REQUEST_ID_HEADER, request_tracking_middleware};
