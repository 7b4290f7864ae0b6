use diesel::prelude::*;

use crate::{
    db::models::api::error_codes,
    db::models::department::{
        CreateDepartmentRequest, Department, NewDepartment, UpdateDepartment,
        UpdateDepartmentRequest,
    },
    db::repositories::departments::DepartmentRepo,
    db::repositories::employees::EmployeeRepo,
    error::AppError,
    services::context::RequestContext,
};

pub struct DepartmentsService;

impl DepartmentsService {
    pub fn create(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        req: &CreateDepartmentRequest,
    ) -> Result<Department, AppError> {
        if DepartmentRepo::find_by_name(conn, &req.name)?.is_some() {
            return Err(AppError::conflict_with_code(
                "Department with this name already exists",
                Some("name".to_string()),
                error_codes::DEPARTMENT_NAME_EXISTS,
            ));
        }
        if let Some(manager) = req.manager_id {
            EmployeeRepo::find_by_id(conn, manager)?
                .ok_or_else(|| AppError::not_found("Employee"))?;
        }

        let new_department = NewDepartment {
            name: req.name.clone(),
            description: req.description.clone(),
            manager_id: req.manager_id,
            budget: req.budget,
            location: req.location.clone(),
        };
        Ok(DepartmentRepo::insert(conn, &new_department)?)
    }

    pub fn get(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        department_id: uuid::Uuid,
    ) -> Result<Department, AppError> {
        DepartmentRepo::find_by_id(conn, department_id)?
            .ok_or_else(|| AppError::not_found("Department"))
    }

    pub fn list(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        search: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Department>, i64), AppError> {
        let total = DepartmentRepo::count(conn, search)?;
        let rows = DepartmentRepo::list(conn, search, page, page_size)?;
        Ok((rows, total))
    }

    pub fn update(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        department_id: uuid::Uuid,
        req: &UpdateDepartmentRequest,
    ) -> Result<Department, AppError> {
        let existing = DepartmentRepo::find_by_id(conn, department_id)?
            .ok_or_else(|| AppError::not_found("Department"))?;

        if req.name.is_none()
            && req.description.is_none()
            && req.manager_id.is_none()
            && req.budget.is_none()
            && req.location.is_none()
        {
            return Err(AppError::validation("No update data provided"));
        }

        if let Some(new_name) = &req.name {
            if let Some(other) = DepartmentRepo::find_by_name(conn, new_name)? {
                if other.id != existing.id {
                    return Err(AppError::conflict_with_code(
                        "Department with this name already exists",
                        Some("name".to_string()),
                        error_codes::DEPARTMENT_NAME_EXISTS,
                    ));
                }
            }
        }
        if let Some(manager) = req.manager_id {
            EmployeeRepo::find_by_id(conn, manager)?
                .ok_or_else(|| AppError::not_found("Employee"))?;
        }

        let changes = UpdateDepartment {
            name: req.name.clone(),
            description: req.description.clone().map(Some),
            manager_id: req.manager_id.map(Some),
            budget: req.budget.map(Some),
            location: req.location.clone().map(Some),
        };
        Ok(DepartmentRepo::update_fields(conn, department_id, &changes)?)
    }

    pub fn delete(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        department_id: uuid::Uuid,
    ) -> Result<(), AppError> {
        DepartmentRepo::find_by_id(conn, department_id)?
            .ok_or_else(|| AppError::not_found("Department"))?;
        DepartmentRepo::delete_by_id(conn, department_id)?;
        Ok(())
    }
}
