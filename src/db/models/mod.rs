// Sub-modules organized by functional domain
pub mod api;
pub mod auth;
pub mod department;
pub mod employee;
pub mod leave;
pub mod performance;

// Re-export all models so imports like `use crate::db::models::Employee` work

// API response structures
pub use api::*;

// Authentication models
pub use auth::*;

// Department models
pub use department::*;

// Employee models
pub use employee::*;

// Leave request and balance models
pub use leave::*;

// Performance review models
pub use performance::*;
