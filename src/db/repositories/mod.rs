pub mod departments;
pub mod employees;
pub mod leaves;
pub mod performance;
