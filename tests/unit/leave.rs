use chrono::NaiveDate;
use hr_backend::db::enums::LeaveType;
use hr_backend::db::models::leave::{LeaveBalance, LeaveBalanceInfo, calculate_days_requested};
use hr_backend::db::models::{ApproveLeaveRequest, ProvisionLeaveBalanceRequest, RejectLeaveRequest};
use hr_backend::validation::leave::validate_leave_dates;
use validator::Validate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn annual_balance(total: i32, used: i32) -> LeaveBalance {
    LeaveBalance {
        id: uuid::Uuid::new_v4(),
        employee_id: uuid::Uuid::new_v4(),
        leave_type: LeaveType::Annual,
        year: 2024,
        total_days: total,
        used_days: used,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

#[test]
fn test_leave_date_range_validation() {
    assert!(validate_leave_dates(date(2024, 1, 1), date(2024, 1, 3)).is_ok());
    assert!(validate_leave_dates(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    assert!(validate_leave_dates(date(2024, 1, 3), date(2024, 1, 1)).is_err());
}

#[test]
fn test_approval_deducts_requested_days_from_balance() {
    // Three calendar days requested, both endpoints included
    let days = calculate_days_requested(date(2024, 1, 1), date(2024, 1, 3));
    assert_eq!(days, 3);

    let balance = annual_balance(10, 2);
    assert!(balance.has_sufficient_balance(days));

    // After approval the used count grows by the requested days
    let after = annual_balance(10, 2 + days);
    assert_eq!(after.used_days, 5);
    assert_eq!(after.remaining_days(), 5);

    // A follow-up request longer than what remains is refused
    let next_days = calculate_days_requested(date(2024, 2, 1), date(2024, 2, 6));
    assert_eq!(next_days, 6);
    assert!(!after.has_sufficient_balance(next_days));
}

#[test]
fn test_balance_info_recomputes_remaining() {
    let info = LeaveBalanceInfo::from(annual_balance(12, 9));
    assert_eq!(info.remaining_days, 3);

    // Overdrawn rows report zero instead of a negative count
    let info = LeaveBalanceInfo::from(annual_balance(5, 8));
    assert_eq!(info.remaining_days, 0);
}

#[test]
fn test_rejection_requires_comments() {
    let req = RejectLeaveRequest {
        comments: "Project deadline conflicts with the requested dates".to_string(),
    };
    assert!(req.validate().is_ok());

    let req = RejectLeaveRequest {
        comments: "".to_string(),
    };
    assert!(req.validate().is_err());

    // Approval comments stay optional
    let req = ApproveLeaveRequest { comments: None };
    assert!(req.validate().is_ok());
}

#[test]
fn test_provision_balance_request_validation() {
    let req = ProvisionLeaveBalanceRequest {
        employee_id: uuid::Uuid::new_v4(),
        leave_type: LeaveType::Annual,
        year: 2024,
        total_days: 20,
    };
    assert!(req.validate().is_ok());

    let req = ProvisionLeaveBalanceRequest {
        employee_id: uuid::Uuid::new_v4(),
        leave_type: LeaveType::Sick,
        year: 1999,
        total_days: 20,
    };
    assert!(req.validate().is_err());

    let req = ProvisionLeaveBalanceRequest {
        employee_id: uuid::Uuid::new_v4(),
        leave_type: LeaveType::Annual,
        year: 2024,
        total_days: -5,
    };
    assert!(req.validate().is_err());
}
