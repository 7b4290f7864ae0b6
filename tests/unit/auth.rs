// Unit tests focus on pure validation and DTO shaping

#[test]
fn password_strength_scoring() {
    use hr_backend::validation::rules::validate_password_strength;

    assert!(validate_password_strength("SecurePass123!").is_ok());
    assert!(validate_password_strength("Passw0rd").is_ok());
    // three of the five criteria is enough
    assert!(validate_password_strength("PASSWORD1").is_ok());
    assert!(validate_password_strength("aB1").is_ok());

    assert!(validate_password_strength("").is_err());
    assert!(validate_password_strength("abc").is_err());
    assert!(validate_password_strength("password").is_err());
    assert!(validate_password_strength("12345").is_err());
}

#[test]
fn validate_login_and_change_password_inputs() {
    use hr_backend::db::models::{ChangePasswordRequest, LoginRequest};
    use validator::Validate;

    // login
    let ok = LoginRequest {
        email: "admin@example.com".to_string(),
        password: "x".to_string(),
    };
    assert!(ok.validate().is_ok());

    let bad_email = LoginRequest {
        email: "not-an-email".to_string(),
        password: "x".to_string(),
    };
    assert!(bad_email.validate().is_err());

    let empty_password = LoginRequest {
        email: "admin@example.com".to_string(),
        password: "".to_string(),
    };
    assert!(empty_password.validate().is_err());

    // change password
    let ok = ChangePasswordRequest {
        current_password: "OldPass123!".to_string(),
        new_password: "NewSecure456!".to_string(),
    };
    assert!(ok.validate().is_ok());

    let missing_current = ChangePasswordRequest {
        current_password: "".to_string(),
        new_password: "NewSecure456!".to_string(),
    };
    assert!(missing_current.validate().is_err());

    let weak_replacement = ChangePasswordRequest {
        current_password: "OldPass123!".to_string(),
        new_password: "weak".to_string(),
    };
    assert!(weak_replacement.validate().is_err());
}
