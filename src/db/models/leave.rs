use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::{LeaveStatus, LeaveType};

// Leave request models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::leaves)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Leave {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub days_requested: i32,
    pub reason: Option<String>,
    pub leave_status: LeaveStatus,
    pub approver_id: Option<Uuid>,
    pub comments: Option<String>,
    pub approved_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leaves)]
pub struct NewLeave {
    pub employee_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub days_requested: i32,
    pub reason: Option<String>,
    pub leave_status: LeaveStatus,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::leaves)]
pub struct UpdateLeave {
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub days_requested: Option<i32>,
    pub reason: Option<Option<String>>,
}

// Leave balance models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::leave_balances)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LeaveBalance {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub leave_type: LeaveType,
    pub year: i32,
    pub total_days: i32,
    pub used_days: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leave_balances)]
pub struct NewLeaveBalance {
    pub employee_id: Uuid,
    pub leave_type: LeaveType,
    pub year: i32,
    pub total_days: i32,
    pub used_days: i32,
}

impl LeaveBalance {
    /// Days still available this year, never negative.
    pub fn remaining_days(&self) -> i32 {
        (self.total_days - self.used_days).max(0)
    }

    pub fn has_sufficient_balance(&self, days: i32) -> bool {
        self.remaining_days() >= days
    }
}

/// Balance row as returned to callers: the remaining count is always
/// recomputed from total and used, never read back from storage.
#[derive(Serialize)]
pub struct LeaveBalanceInfo {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub leave_type: LeaveType,
    pub year: i32,
    pub total_days: i32,
    pub used_days: i32,
    pub remaining_days: i32,
}

impl From<LeaveBalance> for LeaveBalanceInfo {
    fn from(balance: LeaveBalance) -> Self {
        let remaining_days = balance.remaining_days();
        Self {
            id: balance.id,
            employee_id: balance.employee_id,
            leave_type: balance.leave_type,
            year: balance.year,
            total_days: balance.total_days,
            used_days: balance.used_days,
            remaining_days,
        }
    }
}

/// Inclusive day count between two dates. A single-day leave
/// (start == end) counts as one day; inverted ranges count as zero.
pub fn calculate_days_requested(start_date: chrono::NaiveDate, end_date: chrono::NaiveDate) -> i32 {
    let days = (end_date - start_date).num_days() + 1;
    days.max(0) as i32
}

// Request/Response models
#[derive(Deserialize, Validate)]
pub struct CreateLeaveRequest {
    pub employee_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateLeaveRequest {
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub reason: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct ApproveLeaveRequest {
    pub comments: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct RejectLeaveRequest {
    #[validate(length(min = 1, message = "Rejection comments are required"))]
    pub comments: String,
}

#[derive(Deserialize)]
pub struct ListLeavesQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub employee_id: Option<Uuid>,
    pub status: Option<LeaveStatus>,
    pub leave_type: Option<LeaveType>,
}

#[derive(Deserialize)]
pub struct LeaveBalanceQuery {
    pub year: Option<i32>,
}

#[derive(Deserialize, Validate)]
pub struct ProvisionLeaveBalanceRequest {
    pub employee_id: Uuid,
    pub leave_type: LeaveType,

    #[validate(range(min = 2000, max = 2100, message = "Year must be between 2000 and 2100"))]
    pub year: i32,

    #[validate(range(min = 0, message = "Total days cannot be negative"))]
    pub total_days: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_leave_counts_one_day() {
        let day = date(2025, 3, 10);
        assert_eq!(calculate_days_requested(day, day), 1);
    }

    #[test]
    fn day_count_is_inclusive_of_both_endpoints() {
        assert_eq!(
            calculate_days_requested(date(2025, 3, 10), date(2025, 3, 14)),
            5
        );
    }

    #[test]
    fn inverted_range_counts_zero_days() {
        assert_eq!(
            calculate_days_requested(date(2025, 3, 14), date(2025, 3, 10)),
            0
        );
    }

    #[test]
    fn day_count_spans_month_boundaries() {
        assert_eq!(
            calculate_days_requested(date(2025, 1, 30), date(2025, 2, 2)),
            4
        );
    }

    fn balance(total: i32, used: i32) -> LeaveBalance {
        LeaveBalance {
            id: uuid::Uuid::new_v4(),
            employee_id: uuid::Uuid::new_v4(),
            leave_type: LeaveType::Annual,
            year: 2025,
            total_days: total,
            used_days: used,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn remaining_days_subtracts_used_from_total() {
        assert_eq!(balance(20, 5).remaining_days(), 15);
    }

    #[test]
    fn remaining_days_never_goes_negative() {
        assert_eq!(balance(10, 12).remaining_days(), 0);
    }

    #[test]
    fn sufficiency_allows_exactly_remaining_days() {
        let b = balance(20, 15);
        assert!(b.has_sufficient_balance(5));
        assert!(!b.has_sufficient_balance(6));
    }

    #[test]
    fn zero_day_request_is_always_sufficient() {
        assert!(balance(10, 10).has_sufficient_balance(0));
    }
}
