use hr_backend::db::enums::EmployeeRole;
use hr_backend::db::models::{CreateEmployeeRequest, UpdateEmployeeRequest};
use validator::Validate;

fn valid_create_request() -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        employee_code: "EMP-1001".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane.doe@example.com".to_string(),
        phone_number: Some("+1-555-0100".to_string()),
        department_id: None,
        position: Some("Software Engineer".to_string()),
        salary: 85000.0,
        hire_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        street: None,
        city: Some("Portland".to_string()),
        state: Some("OR".to_string()),
        zip_code: None,
        country: Some("USA".to_string()),
        password: "SecurePass123!".to_string(),
        role: Some(EmployeeRole::Employee),
    }
}

#[test]
fn test_create_employee_request_accepts_valid_input() {
    assert!(valid_create_request().validate().is_ok());
}

#[test]
fn test_create_employee_request_rejects_bad_email() {
    let mut req = valid_create_request();
    req.email = "not-an-email".to_string();
    assert!(req.validate().is_err());
}

#[test]
fn test_create_employee_request_rejects_empty_names() {
    let mut req = valid_create_request();
    req.first_name = "".to_string();
    assert!(req.validate().is_err());

    let mut req = valid_create_request();
    req.last_name = "".to_string();
    assert!(req.validate().is_err());
}

#[test]
fn test_create_employee_request_rejects_empty_code() {
    let mut req = valid_create_request();
    req.employee_code = "".to_string();
    assert!(req.validate().is_err());
}

#[test]
fn test_create_employee_request_rejects_negative_salary() {
    let mut req = valid_create_request();
    req.salary = -1.0;
    assert!(req.validate().is_err());
}

#[test]
fn test_create_employee_request_rejects_weak_password() {
    let mut req = valid_create_request();
    req.password = "weak".to_string();
    assert!(req.validate().is_err());
}

#[test]
fn test_update_employee_request_allows_partial_input() {
    // All fields optional; an empty update passes validation
    let req = UpdateEmployeeRequest {
        first_name: None,
        last_name: None,
        email: None,
        phone_number: None,
        department_id: None,
        position: None,
        salary: None,
        status: None,
        street: None,
        city: None,
        state: None,
        zip_code: None,
        country: None,
        role: None,
    };
    assert!(req.validate().is_ok());
}

#[test]
fn test_update_employee_request_still_checks_provided_fields() {
    let mut req = UpdateEmployeeRequest {
        first_name: None,
        last_name: None,
        email: Some("broken@".to_string()),
        phone_number: None,
        department_id: None,
        position: None,
        salary: None,
        status: None,
        street: None,
        city: None,
        state: None,
        zip_code: None,
        country: None,
        role: None,
    };
    assert!(req.validate().is_err());

    req.email = Some("fixed@example.com".to_string());
    req.salary = Some(-500.0);
    assert!(req.validate().is_err());

    req.salary = Some(90000.0);
    assert!(req.validate().is_ok());
}
