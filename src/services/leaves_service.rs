use chrono::Datelike;
use diesel::prelude::*;

use crate::{
    db::enums::{LeaveStatus, LeaveType},
    db::models::api::error_codes,
    db::models::leave::{
        calculate_days_requested, CreateLeaveRequest, Leave, LeaveBalanceInfo, NewLeave,
        NewLeaveBalance, ProvisionLeaveBalanceRequest, UpdateLeave, UpdateLeaveRequest,
    },
    db::repositories::employees::EmployeeRepo,
    db::repositories::leaves::{LeaveBalanceRepo, LeaveRepo},
    error::AppError,
    services::context::RequestContext,
    validation,
};

pub struct LeavesService;

impl LeavesService {
    pub fn create(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        req: &CreateLeaveRequest,
    ) -> Result<Leave, AppError> {
        validation::leave::validate_leave_dates(req.start_date, req.end_date)?;

        EmployeeRepo::find_by_id(conn, req.employee_id)?
            .ok_or_else(|| AppError::not_found("Employee"))?;

        let new_leave = NewLeave {
            employee_id: req.employee_id,
            leave_type: req.leave_type.clone(),
            start_date: req.start_date,
            end_date: req.end_date,
            days_requested: calculate_days_requested(req.start_date, req.end_date),
            reason: req.reason.clone(),
            leave_status: LeaveStatus::Pending,
        };
        let leave = LeaveRepo::insert(conn, &new_leave)?;
        Ok(leave)
    }

    pub fn get(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        leave_id: uuid::Uuid,
    ) -> Result<Leave, AppError> {
        LeaveRepo::find_by_id(conn, leave_id)?.ok_or_else(|| AppError::not_found("Leave request"))
    }

    pub fn list(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        employee: Option<uuid::Uuid>,
        status: Option<LeaveStatus>,
        leave_type: Option<LeaveType>,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Leave>, i64), AppError> {
        let total = LeaveRepo::count(conn, employee, status.clone(), leave_type.clone())?;
        let rows = LeaveRepo::list(conn, employee, status, leave_type, page, page_size)?;
        Ok((rows, total))
    }

    /// Only a pending request may be edited; date edits recompute the
    /// day count after re-validating the ordering.
    pub fn update(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        leave_id: uuid::Uuid,
        req: &UpdateLeaveRequest,
    ) -> Result<Leave, AppError> {
        let leave = LeaveRepo::find_by_id(conn, leave_id)?
            .ok_or_else(|| AppError::not_found("Leave request"))?;

        if leave.leave_status != LeaveStatus::Pending {
            return Err(AppError::failed_precondition(format!(
                "cannot update leave with status: {}",
                leave.leave_status
            )));
        }

        if req.leave_type.is_none()
            && req.start_date.is_none()
            && req.end_date.is_none()
            && req.reason.is_none()
        {
            return Err(AppError::validation("No update data provided"));
        }

        let start = req.start_date.unwrap_or(leave.start_date);
        let end = req.end_date.unwrap_or(leave.end_date);
        validation::leave::validate_leave_dates(start, end)?;

        let mut changes = UpdateLeave {
            leave_type: req.leave_type.clone(),
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason.clone().map(Some),
            ..Default::default()
        };
        if req.start_date.is_some() || req.end_date.is_some() {
            changes.days_requested = Some(calculate_days_requested(start, end));
        }

        Ok(LeaveRepo::update_fields(conn, leave_id, &changes)?)
    }

    /// Approves a pending request and debits the matching balance row,
    /// all in one transaction. The balance must be pre-provisioned and
    /// must have enough remaining days; otherwise the whole transaction
    /// rolls back and the request stays pending.
    pub fn approve(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        leave_id: uuid::Uuid,
        comments: Option<String>,
    ) -> Result<Leave, AppError> {
        let approver = ctx.employee_id;
        conn.transaction::<Leave, AppError, _>(|tx| {
            let leave = LeaveRepo::find_by_id(tx, leave_id)?
                .ok_or_else(|| AppError::not_found("Leave request"))?;

            if leave.leave_status != LeaveStatus::Pending {
                return Err(AppError::failed_precondition(format!(
                    "cannot approve leave with status: {}",
                    leave.leave_status
                )));
            }

            let updated = LeaveRepo::record_decision(
                tx,
                leave_id,
                LeaveStatus::Approved,
                approver,
                comments.clone(),
                chrono::Utc::now(),
            )?
            .ok_or_else(|| {
                // A concurrent decision won the row between our read and
                // the guarded update.
                AppError::failed_precondition("Leave request is no longer pending")
            })?;

            let year = updated.start_date.year();
            let balance = LeaveBalanceRepo::find_for(
                tx,
                updated.employee_id,
                updated.leave_type.clone(),
                year,
            )?
            .ok_or_else(|| {
                AppError::failed_precondition(format!(
                    "no leave balance provisioned for {} in {}",
                    updated.leave_type, year
                ))
            })?;

            if !balance.has_sufficient_balance(updated.days_requested) {
                return Err(AppError::failed_precondition(format!(
                    "insufficient leave balance: {} days remaining, {} requested",
                    balance.remaining_days(),
                    updated.days_requested
                )));
            }

            LeaveBalanceRepo::add_used_days(tx, balance.id, updated.days_requested)?;
            Ok(updated)
        })
    }

    /// Rejects a pending request. No ledger mutation; still transactional
    /// so the status check and the write cannot interleave with a
    /// concurrent decision.
    pub fn reject(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        leave_id: uuid::Uuid,
        comments: String,
    ) -> Result<Leave, AppError> {
        let approver = ctx.employee_id;
        conn.transaction::<Leave, AppError, _>(|tx| {
            let leave = LeaveRepo::find_by_id(tx, leave_id)?
                .ok_or_else(|| AppError::not_found("Leave request"))?;

            if leave.leave_status != LeaveStatus::Pending {
                return Err(AppError::failed_precondition(format!(
                    "cannot reject leave with status: {}",
                    leave.leave_status
                )));
            }

            LeaveRepo::record_decision(
                tx,
                leave_id,
                LeaveStatus::Rejected,
                approver,
                Some(comments.clone()),
                chrono::Utc::now(),
            )?
            .ok_or_else(|| AppError::failed_precondition("Leave request is no longer pending"))
        })
    }

    /// The cancellation path: a request can be withdrawn only while pending.
    pub fn delete(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        leave_id: uuid::Uuid,
    ) -> Result<(), AppError> {
        let leave = LeaveRepo::find_by_id(conn, leave_id)?
            .ok_or_else(|| AppError::not_found("Leave request"))?;

        if leave.leave_status != LeaveStatus::Pending {
            return Err(AppError::failed_precondition(format!(
                "cannot cancel leave with status: {}",
                leave.leave_status
            )));
        }

        let deleted = LeaveRepo::delete_pending(conn, leave_id)?;
        if deleted == 0 {
            return Err(AppError::failed_precondition(
                "Leave request is no longer pending",
            ));
        }
        Ok(())
    }

    pub fn get_balance(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        employee: uuid::Uuid,
        year: Option<i32>,
    ) -> Result<Vec<LeaveBalanceInfo>, AppError> {
        EmployeeRepo::find_by_id(conn, employee)?
            .ok_or_else(|| AppError::not_found("Employee"))?;

        let balances = LeaveBalanceRepo::list_for_employee(conn, employee, year)?;
        Ok(balances.into_iter().map(LeaveBalanceInfo::from).collect())
    }

    pub fn provision_balance(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        req: &ProvisionLeaveBalanceRequest,
    ) -> Result<LeaveBalanceInfo, AppError> {
        EmployeeRepo::find_by_id(conn, req.employee_id)?
            .ok_or_else(|| AppError::not_found("Employee"))?;

        if LeaveBalanceRepo::find_for(conn, req.employee_id, req.leave_type.clone(), req.year)?
            .is_some()
        {
            return Err(AppError::conflict_with_code(
                "Leave balance already provisioned for this employee, type and year",
                None,
                error_codes::LEAVE_BALANCE_EXISTS,
            ));
        }

        let new_balance = NewLeaveBalance {
            employee_id: req.employee_id,
            leave_type: req.leave_type.clone(),
            year: req.year,
            total_days: req.total_days,
            used_days: 0,
        };
        let balance = LeaveBalanceRepo::insert(conn, &new_balance)?;
        Ok(LeaveBalanceInfo::from(balance))
    }
}
