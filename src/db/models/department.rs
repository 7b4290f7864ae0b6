use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Department models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<Uuid>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::departments)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<Uuid>,
    pub budget: Option<f64>,
    pub location: Option<String>,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::departments)]
pub struct UpdateDepartment {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub manager_id: Option<Option<Uuid>>,
    pub budget: Option<Option<f64>>,
    pub location: Option<Option<String>>,
}

#[derive(Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = 255, message = "Department name must be between 1 and 255 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<Uuid>,
    #[validate(range(min = 0.0, message = "Budget cannot be negative"))]
    pub budget: Option<f64>,
    pub location: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = 255, message = "Department name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub manager_id: Option<Uuid>,
    #[validate(range(min = 0.0, message = "Budget cannot be negative"))]
    pub budget: Option<f64>,
    pub location: Option<String>,
}

#[derive(Deserialize)]
pub struct ListDepartmentsQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
}
