use serde_json::json;
use uuid::Uuid;

mod unit;

const API_BASE_URL: &str = "http://127.0.0.1:8000";
const TEST_JWT_SECRET: &str = "0123456789abcdef0123456789abcdef"; // Should match your JWT_SECRET

/// Helper function to create test JWT tokens
fn create_test_jwt(employee_id: Uuid, employee_code: &str, email: &str) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    #[derive(serde::Serialize)]
    struct TestClaims {
        sub: Uuid,
        email: String,
        employee_code: String,
        role: String,
        iss: String,
        exp: u64,
        iat: u64,
        jti: String,
    }

    let now = chrono::Utc::now().timestamp() as u64;

    let claims = TestClaims {
        sub: employee_id,
        email: email.to_string(),
        employee_code: employee_code.to_string(),
        role: "ADMIN".to_string(),
        iss: "hr-management-system".to_string(),
        exp: now + 3600, // 1 hour from now
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_ref()),
    )
    .unwrap()
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_protected_route_requires_token() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/employees", API_BASE_URL))
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(response.status(), 401);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_protected_route_rejects_garbage_token() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/leaves", API_BASE_URL))
        .bearer_auth("not.a.valid.token")
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(response.status(), 401);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_login_rejects_unknown_email() {
    let client = reqwest::Client::new();

    let payload = json!({
        "email": format!("nobody-{}@example.com", Uuid::new_v4()),
        "password": "SecurePass123!",
    });

    let response = client
        .post(format!("{}/auth/login", API_BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(response.status(), 401);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_login_validates_payload() {
    let client = reqwest::Client::new();

    let payload = json!({
        "email": "not-an-email",
        "password": "",
    });

    let response = client
        .post(format!("{}/auth/login", API_BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_valid_token_grants_access_to_employee_list() {
    let client = reqwest::Client::new();
    let token = create_test_jwt(Uuid::new_v4(), "EMP-TEST", "test@example.com");

    let response = client
        .get(format!("{}/employees", API_BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert!(body["data"].is_array());
    assert!(body["meta"]["pagination"]["total_pages"].is_number());
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_profile_requires_live_employee_record() {
    // Token claims alone are not enough for the profile endpoint; the
    // employee row must exist and be active.
    let client = reqwest::Client::new();
    let token = create_test_jwt(Uuid::new_v4(), "EMP-GHOST", "ghost@example.com");

    let response = client
        .get(format!("{}/auth/profile", API_BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_request_id_is_echoed() {
    let client = reqwest::Client::new();

    // A caller-provided id comes back unchanged
    let supplied = format!("trace-{}", Uuid::new_v4());
    let response = client
        .get(format!("{}/employees", API_BASE_URL))
        .header("x-request-id", &supplied)
        .send()
        .await
        .expect("Failed to reach server");

    let echoed = response
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id header")
        .to_str()
        .expect("Non-ASCII request id");
    assert_eq!(echoed, supplied);

    // Without one the server generates its own
    let response = client
        .get(format!("{}/employees", API_BASE_URL))
        .send()
        .await
        .expect("Failed to reach server");

    let generated = response
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id header")
        .to_str()
        .expect("Non-ASCII request id");
    assert!(!generated.is_empty());
}

#[tokio::test]
#[ignore = "requires running server and database"]
async fn test_leave_request_lifecycle() {
    let client = reqwest::Client::new();
    let suffix = &Uuid::new_v4().to_string()[..8];

    // Bootstrap: create an admin employee using a forged token, then act
    // as that employee so decision audit fields point at a real row.
    let bootstrap_token = create_test_jwt(Uuid::new_v4(), "EMP-BOOT", "boot@example.com");

    let employee_payload = json!({
        "employee_code": format!("EMP-{}", suffix),
        "first_name": "Lifecycle",
        "last_name": "Tester",
        "email": format!("lifecycle-{}@example.com", suffix),
        "salary": 75000.0,
        "hire_date": "2024-01-15",
        "country": "USA",
        "password": "SecurePass123!",
        "role": "ADMIN",
    });

    let response = client
        .post(format!("{}/employees", API_BASE_URL))
        .bearer_auth(&bootstrap_token)
        .json(&employee_payload)
        .send()
        .await
        .expect("Failed to create employee");
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let employee_id: Uuid = body["data"]["id"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("Missing employee id");

    let token = create_test_jwt(
        employee_id,
        &format!("EMP-{}", suffix),
        &format!("lifecycle-{}@example.com", suffix),
    );

    // Provision the annual allowance for the year the leave falls in
    let provision_payload = json!({
        "employee_id": employee_id,
        "leave_type": "ANNUAL",
        "year": 2030,
        "total_days": 20,
    });
    let response = client
        .post(format!("{}/leave-balances", API_BASE_URL))
        .bearer_auth(&token)
        .json(&provision_payload)
        .send()
        .await
        .expect("Failed to provision balance");
    assert_eq!(response.status(), 201);

    // Submit a three-day request
    let leave_payload = json!({
        "employee_id": employee_id,
        "leave_type": "ANNUAL",
        "start_date": "2030-07-01",
        "end_date": "2030-07-03",
        "reason": "Family trip",
    });
    let response = client
        .post(format!("{}/leaves", API_BASE_URL))
        .bearer_auth(&token)
        .json(&leave_payload)
        .send()
        .await
        .expect("Failed to create leave");
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"]["leave_status"], "PENDING");
    assert_eq!(body["data"]["days_requested"], 3);
    let leave_id = body["data"]["id"].as_str().expect("Missing leave id").to_string();

    // Approve it
    let response = client
        .post(format!("{}/leaves/{}/approve", API_BASE_URL, leave_id))
        .bearer_auth(&token)
        .json(&json!({ "comments": "Enjoy" }))
        .send()
        .await
        .expect("Failed to approve leave");
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"]["leave_status"], "APPROVED");

    // The ledger reflects the deduction
    let response = client
        .get(format!(
            "{}/employees/{}/leave-balances?year=2030",
            API_BASE_URL, employee_id
        ))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch balances");
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let annual = body["data"]
        .as_array()
        .and_then(|rows| {
            rows.iter()
                .find(|row| row["leave_type"] == "ANNUAL" && row["year"] == 2030)
        })
        .expect("Missing annual balance row");
    assert_eq!(annual["used_days"], 3);
    assert_eq!(annual["remaining_days"], 17);

    // A second decision on the same request is refused
    let response = client
        .post(format!("{}/leaves/{}/approve", API_BASE_URL, leave_id))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to reach server");
    assert_eq!(response.status(), 412);
}

// Response envelope and DTO shape tests
mod envelope_tests {
    use hr_backend::db::enums::{EmployeeRole, EmployeeStatus, LeaveStatus};
    use hr_backend::db::models::{ApiResponse, Employee, LoginResponse};
    use uuid::Uuid;

    fn mock_employee() -> Employee {
        Employee {
            id: Uuid::new_v4(),
            employee_code: "EMP-0001".to_string(),
            first_name: "Test".to_string(),
            last_name: "Employee".to_string(),
            email: "test@example.com".to_string(),
            phone_number: None,
            department_id: None,
            position: Some("Engineer".to_string()),
            salary: 80000.0,
            hire_date: chrono::NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            status: EmployeeStatus::Active,
            street: None,
            city: None,
            state: None,
            zip_code: None,
            country: "USA".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: EmployeeRole::Employee,
            last_login_at: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_paginated_envelope_math() {
        let rows: Vec<i32> = (0..10).collect();
        let response = ApiResponse::paginated(rows, "Employees retrieved successfully", 2, 10, 25);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["meta"]["pagination"]["page"], 2);
        assert_eq!(value["meta"]["pagination"]["total_pages"], 3);
        assert_eq!(value["meta"]["pagination"]["has_next"], true);
        assert_eq!(value["meta"]["pagination"]["has_prev"], true);
        assert_eq!(value["meta"]["total_count"], 25);
        // Empty optional sections stay off the wire
        assert!(value.get("errors").is_none());

        // Last page has no successor
        let response = ApiResponse::paginated(vec![21, 22, 23, 24, 25], "ok", 3, 10, 25);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["meta"]["pagination"]["has_next"], false);
        assert_eq!(value["meta"]["pagination"]["has_prev"], true);

        println!("✅ Pagination envelope math test passed");
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = ApiResponse::<()>::unauthorized("Invalid or expired token");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["code"], 401);
        assert_eq!(value["errors"][0]["code"], "UNAUTHORIZED");
        assert!(value.get("data").is_none());

        println!("✅ Error envelope shape test passed");
    }

    #[tokio::test]
    async fn test_login_response_hides_password_hash() {
        let employee = mock_employee();
        let login = LoginResponse {
            access_token: "header.payload.signature".to_string(),
            refresh_token: "header.payload.signature".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 900,
            employee,
        };

        let value = serde_json::to_value(&login).unwrap();
        assert_eq!(value["token_type"], "Bearer");
        assert_eq!(value["expires_in"], 900);
        assert_eq!(value["employee"]["employee_code"], "EMP-0001");
        // The hash never leaves the server
        assert!(value["employee"].get("password_hash").is_none());

        println!("✅ Login response serialization test passed");
    }

    #[tokio::test]
    async fn test_enum_wire_format() {
        assert_eq!(
            serde_json::to_value(EmployeeRole::Admin).unwrap(),
            serde_json::json!("ADMIN")
        );
        assert_eq!(
            serde_json::to_value(EmployeeStatus::OnLeave).unwrap(),
            serde_json::json!("ON_LEAVE")
        );
        assert_eq!(
            serde_json::to_value(LeaveStatus::Pending).unwrap(),
            serde_json::json!("PENDING")
        );
        assert_eq!(LeaveStatus::Approved.to_string(), "APPROVED");

        println!("✅ Enum wire format test passed");
    }
}
