use diesel::prelude::*;

use crate::{
    db::enums::{EmployeeRole, EmployeeStatus},
    db::models::api::error_codes,
    db::models::employee::{
        CreateEmployeeRequest, Employee, NewEmployee, UpdateEmployee, UpdateEmployeeRequest,
    },
    db::repositories::departments::DepartmentRepo,
    db::repositories::employees::EmployeeRepo,
    error::AppError,
    services::context::RequestContext,
};

pub struct EmployeesService;

impl EmployeesService {
    pub fn create(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        req: &CreateEmployeeRequest,
        bcrypt_cost: u32,
    ) -> Result<Employee, AppError> {
        if EmployeeRepo::find_by_email(conn, &req.email)?.is_some() {
            return Err(AppError::conflict_with_code(
                "Employee with this email already exists",
                Some("email".to_string()),
                error_codes::EMPLOYEE_EMAIL_EXISTS,
            ));
        }
        if EmployeeRepo::find_by_code(conn, &req.employee_code)?.is_some() {
            return Err(AppError::conflict_with_code(
                "Employee with this employee code already exists",
                Some("employee_code".to_string()),
                error_codes::EMPLOYEE_CODE_EXISTS,
            ));
        }
        if let Some(dept) = req.department_id {
            DepartmentRepo::find_by_id(conn, dept)?
                .ok_or_else(|| AppError::not_found("Department"))?;
        }

        let password_hash = bcrypt::hash(req.password.as_bytes(), bcrypt_cost)?;

        let new_employee = NewEmployee {
            employee_code: req.employee_code.clone(),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            email: req.email.clone(),
            phone_number: req.phone_number.clone(),
            department_id: req.department_id,
            position: req.position.clone(),
            salary: req.salary,
            hire_date: req.hire_date,
            status: EmployeeStatus::Active,
            street: req.street.clone(),
            city: req.city.clone(),
            state: req.state.clone(),
            zip_code: req.zip_code.clone(),
            country: req.country.clone().unwrap_or_else(|| "IN".to_string()),
            password_hash,
            role: req.role.clone().unwrap_or(EmployeeRole::Employee),
        };
        Ok(EmployeeRepo::insert(conn, &new_employee)?)
    }

    pub fn get(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        employee_id: uuid::Uuid,
    ) -> Result<Employee, AppError> {
        EmployeeRepo::find_by_id(conn, employee_id)?.ok_or_else(|| AppError::not_found("Employee"))
    }

    pub fn list(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        search: Option<&str>,
        department: Option<uuid::Uuid>,
        status: Option<EmployeeStatus>,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Employee>, i64), AppError> {
        let total = EmployeeRepo::count(conn, search, department, status.clone())?;
        let rows = EmployeeRepo::list(conn, search, department, status, page, page_size)?;
        Ok((rows, total))
    }

    pub fn update(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        employee_id: uuid::Uuid,
        req: &UpdateEmployeeRequest,
    ) -> Result<Employee, AppError> {
        let existing = EmployeeRepo::find_by_id(conn, employee_id)?
            .ok_or_else(|| AppError::not_found("Employee"))?;

        if let Some(new_email) = &req.email {
            if let Some(other) = EmployeeRepo::find_by_email(conn, new_email)? {
                if other.id != existing.id {
                    return Err(AppError::conflict_with_code(
                        "Employee with this email already exists",
                        Some("email".to_string()),
                        error_codes::EMPLOYEE_EMAIL_EXISTS,
                    ));
                }
            }
        }
        if let Some(dept) = req.department_id {
            DepartmentRepo::find_by_id(conn, dept)?
                .ok_or_else(|| AppError::not_found("Department"))?;
        }

        let changes = UpdateEmployee {
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            email: req.email.clone(),
            phone_number: req.phone_number.clone().map(Some),
            department_id: req.department_id.map(Some),
            position: req.position.clone().map(Some),
            salary: req.salary,
            status: req.status.clone(),
            street: req.street.clone().map(Some),
            city: req.city.clone().map(Some),
            state: req.state.clone().map(Some),
            zip_code: req.zip_code.clone().map(Some),
            country: req.country.clone(),
            role: req.role.clone(),
        };
        Ok(EmployeeRepo::update_fields(conn, employee_id, &changes)?)
    }

    pub fn delete(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        employee_id: uuid::Uuid,
    ) -> Result<(), AppError> {
        EmployeeRepo::find_by_id(conn, employee_id)?
            .ok_or_else(|| AppError::not_found("Employee"))?;
        EmployeeRepo::delete_by_id(conn, employee_id)?;
        Ok(())
    }

    pub fn managers(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
    ) -> Result<Vec<Employee>, AppError> {
        Ok(EmployeeRepo::list_managers(conn)?)
    }

    /// Verifies the caller's current password before storing a new hash.
    pub fn change_password(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
        bcrypt_cost: u32,
    ) -> Result<(), AppError> {
        let employee = EmployeeRepo::find_by_id(conn, ctx.employee_id)?
            .ok_or_else(|| AppError::not_found("Employee"))?;

        let matches = bcrypt::verify(current_password, &employee.password_hash)?;
        if !matches {
            return Err(AppError::auth("Current password is incorrect"));
        }

        let new_hash = bcrypt::hash(new_password.as_bytes(), bcrypt_cost)?;
        EmployeeRepo::update_password(conn, ctx.employee_id, &new_hash)?;
        Ok(())
    }
}
