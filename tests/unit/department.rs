use hr_backend::db::models::{CreateDepartmentRequest, UpdateDepartmentRequest};
use validator::Validate;

#[test]
fn test_create_department_request_validation() {
    let req = CreateDepartmentRequest {
        name: "Engineering".to_string(),
        description: Some("Product development".to_string()),
        manager_id: None,
        budget: Some(1_500_000.0),
        location: Some("Building A".to_string()),
    };
    assert!(req.validate().is_ok());

    // Empty name should fail
    let req = CreateDepartmentRequest {
        name: "".to_string(),
        description: None,
        manager_id: None,
        budget: None,
        location: None,
    };
    assert!(req.validate().is_err());

    // Name over 255 characters should fail
    let req = CreateDepartmentRequest {
        name: "x".repeat(256),
        description: None,
        manager_id: None,
        budget: None,
        location: None,
    };
    assert!(req.validate().is_err());

    // Negative budget should fail
    let req = CreateDepartmentRequest {
        name: "Engineering".to_string(),
        description: None,
        manager_id: None,
        budget: Some(-100.0),
        location: None,
    };
    assert!(req.validate().is_err());
}

#[test]
fn test_update_department_request_validation() {
    // All-None update is valid; the service decides whether it is a no-op
    let req = UpdateDepartmentRequest {
        name: None,
        description: None,
        manager_id: None,
        budget: None,
        location: None,
    };
    assert!(req.validate().is_ok());

    let req = UpdateDepartmentRequest {
        name: Some("".to_string()),
        description: None,
        manager_id: None,
        budget: None,
        location: None,
    };
    assert!(req.validate().is_err());

    let req = UpdateDepartmentRequest {
        name: Some("Operations".to_string()),
        description: None,
        manager_id: None,
        budget: Some(-1.0),
        location: None,
    };
    assert!(req.validate().is_err());
}
