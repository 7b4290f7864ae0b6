use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::{EmployeeRole, EmployeeStatus};
use crate::validation::rules::validate_password_strength;

// Employee models
#[derive(Queryable, Selectable, Serialize, Clone, Debug)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    pub id: Uuid,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub department_id: Option<Uuid>,
    pub position: Option<String>,
    pub salary: f64,
    pub hire_date: chrono::NaiveDate,
    pub status: EmployeeStatus,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: EmployeeRole,
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
pub struct NewEmployee {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub department_id: Option<Uuid>,
    pub position: Option<String>,
    pub salary: f64,
    pub hire_date: chrono::NaiveDate,
    pub status: EmployeeStatus,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    pub password_hash: String,
    pub role: EmployeeRole,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::employees)]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub department_id: Option<Option<Uuid>>,
    pub position: Option<Option<String>>,
    pub salary: Option<f64>,
    pub status: Option<EmployeeStatus>,
    pub street: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub zip_code: Option<Option<String>>,
    pub country: Option<String>,
    pub role: Option<EmployeeRole>,
}

#[derive(Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 50, message = "Employee code must be between 1 and 50 characters"))]
    pub employee_code: String,

    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone_number: Option<String>,
    pub department_id: Option<Uuid>,
    pub position: Option<String>,

    #[validate(range(min = 0.0, message = "Salary cannot be negative"))]
    pub salary: f64,

    pub hire_date: chrono::NaiveDate,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,

    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    pub role: Option<EmployeeRole>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub phone_number: Option<String>,
    pub department_id: Option<Uuid>,
    pub position: Option<String>,

    #[validate(range(min = 0.0, message = "Salary cannot be negative"))]
    pub salary: Option<f64>,

    pub status: Option<EmployeeStatus>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub role: Option<EmployeeRole>,
}

#[derive(Deserialize)]
pub struct ListEmployeesQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
    pub department_id: Option<Uuid>,
    pub status: Option<EmployeeStatus>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
