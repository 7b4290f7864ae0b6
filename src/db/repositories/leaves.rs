use diesel::prelude::*;

use crate::db::enums::{LeaveStatus, LeaveType};
use crate::db::models::leave::{Leave, LeaveBalance, NewLeave, NewLeaveBalance, UpdateLeave};

pub struct LeaveRepo;

impl LeaveRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_leave: &NewLeave,
    ) -> Result<Leave, diesel::result::Error> {
        diesel::insert_into(crate::schema::leaves::table)
            .values(new_leave)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        leave_id: uuid::Uuid,
    ) -> Result<Option<Leave>, diesel::result::Error> {
        use crate::schema::leaves::dsl::*;
        leaves.filter(id.eq(leave_id)).first::<Leave>(conn).optional()
    }

    pub fn list(
        conn: &mut PgConnection,
        employee: Option<uuid::Uuid>,
        status_filter: Option<LeaveStatus>,
        type_filter: Option<LeaveType>,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Leave>, diesel::result::Error> {
        use crate::schema::leaves::dsl::*;
        let mut query = leaves.into_boxed();

        if let Some(emp) = employee {
            query = query.filter(employee_id.eq(emp));
        }
        if let Some(st) = status_filter {
            query = query.filter(leave_status.eq(st));
        }
        if let Some(lt) = type_filter {
            query = query.filter(leave_type.eq(lt));
        }

        query
            .order(created_at.desc())
            .offset((page - 1) * page_size)
            .limit(page_size)
            .load::<Leave>(conn)
    }

    pub fn count(
        conn: &mut PgConnection,
        employee: Option<uuid::Uuid>,
        status_filter: Option<LeaveStatus>,
        type_filter: Option<LeaveType>,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::leaves::dsl::*;
        let mut query = leaves.select(diesel::dsl::count_star()).into_boxed();

        if let Some(emp) = employee {
            query = query.filter(employee_id.eq(emp));
        }
        if let Some(st) = status_filter {
            query = query.filter(leave_status.eq(st));
        }
        if let Some(lt) = type_filter {
            query = query.filter(leave_type.eq(lt));
        }

        query.get_result::<i64>(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        leave_id: uuid::Uuid,
        changes: &UpdateLeave,
    ) -> Result<Leave, diesel::result::Error> {
        use crate::schema::leaves::dsl as l;
        diesel::update(l::leaves.filter(l::id.eq(leave_id)))
            .set((changes, l::updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    /// Moves a request out of `PENDING`, recording who decided and when.
    /// The status guard in the WHERE clause makes the transition race-safe:
    /// of two concurrent deciders, only one matches the `PENDING` row.
    pub fn record_decision(
        conn: &mut PgConnection,
        leave_id: uuid::Uuid,
        new_status: LeaveStatus,
        approver: uuid::Uuid,
        decision_comments: Option<String>,
        decided_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<Leave>, diesel::result::Error> {
        use crate::schema::leaves::dsl as l;
        diesel::update(
            l::leaves
                .filter(l::id.eq(leave_id))
                .filter(l::leave_status.eq(LeaveStatus::Pending)),
        )
        .set((
            l::leave_status.eq(new_status),
            l::approver_id.eq(approver),
            l::comments.eq(decision_comments),
            l::approved_at.eq(decided_at),
            l::updated_at.eq(decided_at),
        ))
        .get_result::<Leave>(conn)
        .optional()
    }

    /// Deletes a request only while it is still pending.
    pub fn delete_pending(
        conn: &mut PgConnection,
        leave_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::leaves::dsl::*;
        diesel::delete(
            leaves
                .filter(id.eq(leave_id))
                .filter(leave_status.eq(LeaveStatus::Pending)),
        )
        .execute(conn)
    }
}

pub struct LeaveBalanceRepo;

impl LeaveBalanceRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_balance: &NewLeaveBalance,
    ) -> Result<LeaveBalance, diesel::result::Error> {
        diesel::insert_into(crate::schema::leave_balances::table)
            .values(new_balance)
            .get_result(conn)
    }

    pub fn find_for(
        conn: &mut PgConnection,
        employee: uuid::Uuid,
        lt: LeaveType,
        target_year: i32,
    ) -> Result<Option<LeaveBalance>, diesel::result::Error> {
        use crate::schema::leave_balances::dsl::*;
        leave_balances
            .filter(employee_id.eq(employee))
            .filter(leave_type.eq(lt))
            .filter(year.eq(target_year))
            .first::<LeaveBalance>(conn)
            .optional()
    }

    pub fn list_for_employee(
        conn: &mut PgConnection,
        employee: uuid::Uuid,
        target_year: Option<i32>,
    ) -> Result<Vec<LeaveBalance>, diesel::result::Error> {
        use crate::schema::leave_balances::dsl::*;
        let mut query = leave_balances.filter(employee_id.eq(employee)).into_boxed();

        if let Some(y) = target_year {
            query = query.filter(year.eq(y));
        }

        query
            .order((year.desc(), created_at.asc()))
            .load::<LeaveBalance>(conn)
    }

    pub fn add_used_days(
        conn: &mut PgConnection,
        balance_id: uuid::Uuid,
        days: i32,
    ) -> Result<LeaveBalance, diesel::result::Error> {
        use crate::schema::leave_balances::dsl::*;
        diesel::update(leave_balances.filter(id.eq(balance_id)))
            .set((used_days.eq(used_days + days), updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }
}
