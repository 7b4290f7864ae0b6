use diesel::prelude::*;

use crate::db::models::department::{Department, NewDepartment, UpdateDepartment};

pub struct DepartmentRepo;

impl DepartmentRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_department: &NewDepartment,
    ) -> Result<Department, diesel::result::Error> {
        diesel::insert_into(crate::schema::departments::table)
            .values(new_department)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        department_id: uuid::Uuid,
    ) -> Result<Option<Department>, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        departments.filter(id.eq(department_id)).first::<Department>(conn).optional()
    }

    pub fn find_by_name(
        conn: &mut PgConnection,
        target_name: &str,
    ) -> Result<Option<Department>, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        departments.filter(name.eq(target_name)).first::<Department>(conn).optional()
    }

    pub fn list(
        conn: &mut PgConnection,
        search: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Department>, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        let mut query = departments.into_boxed();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(name.ilike(pattern.clone()).or(description.ilike(pattern)));
        }

        query
            .order(created_at.desc())
            .offset((page - 1) * page_size)
            .limit(page_size)
            .load::<Department>(conn)
    }

    pub fn count(
        conn: &mut PgConnection,
        search: Option<&str>,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        let mut query = departments.select(diesel::dsl::count_star()).into_boxed();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(name.ilike(pattern.clone()).or(description.ilike(pattern)));
        }

        query.get_result::<i64>(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        department_id: uuid::Uuid,
        changes: &UpdateDepartment,
    ) -> Result<Department, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        diesel::update(departments.filter(id.eq(department_id)))
            .set((changes, updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        department_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        diesel::delete(departments.filter(id.eq(department_id))).execute(conn)
    }
}
