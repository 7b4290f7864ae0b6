use diesel::prelude::*;

use crate::db::enums::{EmployeeRole, EmployeeStatus};
use crate::db::models::employee::{Employee, NewEmployee, UpdateEmployee};

pub struct EmployeeRepo;

impl EmployeeRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_employee: &NewEmployee,
    ) -> Result<Employee, diesel::result::Error> {
        diesel::insert_into(crate::schema::employees::table)
            .values(new_employee)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        employee_id: uuid::Uuid,
    ) -> Result<Option<Employee>, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        employees.filter(id.eq(employee_id)).first::<Employee>(conn).optional()
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        target_email: &str,
    ) -> Result<Option<Employee>, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        employees.filter(email.eq(target_email)).first::<Employee>(conn).optional()
    }

    pub fn find_by_code(
        conn: &mut PgConnection,
        code: &str,
    ) -> Result<Option<Employee>, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        employees.filter(employee_code.eq(code)).first::<Employee>(conn).optional()
    }

    pub fn list(
        conn: &mut PgConnection,
        search: Option<&str>,
        department: Option<uuid::Uuid>,
        status_filter: Option<EmployeeStatus>,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Employee>, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        let mut query = employees.into_boxed();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                first_name
                    .ilike(pattern.clone())
                    .or(last_name.ilike(pattern.clone()))
                    .or(email.ilike(pattern.clone()))
                    .or(employee_code.ilike(pattern)),
            );
        }
        if let Some(dept) = department {
            query = query.filter(department_id.eq(dept));
        }
        if let Some(st) = status_filter {
            query = query.filter(status.eq(st));
        }

        query
            .order(created_at.desc())
            .offset((page - 1) * page_size)
            .limit(page_size)
            .load::<Employee>(conn)
    }

    pub fn count(
        conn: &mut PgConnection,
        search: Option<&str>,
        department: Option<uuid::Uuid>,
        status_filter: Option<EmployeeStatus>,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        let mut query = employees.select(diesel::dsl::count_star()).into_boxed();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                first_name
                    .ilike(pattern.clone())
                    .or(last_name.ilike(pattern.clone()))
                    .or(email.ilike(pattern.clone()))
                    .or(employee_code.ilike(pattern)),
            );
        }
        if let Some(dept) = department {
            query = query.filter(department_id.eq(dept));
        }
        if let Some(st) = status_filter {
            query = query.filter(status.eq(st));
        }

        query.get_result::<i64>(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        employee_id: uuid::Uuid,
        changes: &UpdateEmployee,
    ) -> Result<Employee, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        diesel::update(employees.filter(id.eq(employee_id)))
            .set((changes, updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        employee_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        diesel::delete(employees.filter(id.eq(employee_id))).execute(conn)
    }

    /// Employees eligible to approve leave or own a department.
    pub fn list_managers(conn: &mut PgConnection) -> Result<Vec<Employee>, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        employees
            .filter(role.eq_any(vec![
                EmployeeRole::Manager,
                EmployeeRole::Hr,
                EmployeeRole::Admin,
            ]))
            .filter(status.eq(EmployeeStatus::Active))
            .order((first_name.asc(), last_name.asc()))
            .load::<Employee>(conn)
    }

    pub fn update_last_login(
        conn: &mut PgConnection,
        employee_id: uuid::Uuid,
        at: chrono::DateTime<chrono::Utc>,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        diesel::update(employees.filter(id.eq(employee_id)))
            .set(last_login_at.eq(at))
            .execute(conn)
    }

    pub fn update_password(
        conn: &mut PgConnection,
        employee_id: uuid::Uuid,
        new_hash: &str,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        diesel::update(employees.filter(id.eq(employee_id)))
            .set((password_hash.eq(new_hash), updated_at.eq(chrono::Utc::now())))
            .execute(conn)
    }
}
