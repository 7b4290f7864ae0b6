use crate::AppState;
use crate::db::enums::EmployeeRole;
use crate::db::models::{AuthEmployee, Employee};
use crate::error::AppError;
use axum::{
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Issuer stamped into every token and required back on verification.
pub const TOKEN_ISSUER: &str = "hr-management-system";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid, // employee id
    pub email: String,
    pub employee_code: String,
    pub role: EmployeeRole,
    pub iss: String,
    pub exp: u64, // expiration time
    pub iat: u64, // issued at
    pub jti: String, // JWT ID
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: uuid::Uuid, // employee id
    pub iss: String,
    pub exp: u64,
    pub iat: u64,
    pub jti: String,
    pub token_type: String, // always "refresh"
}

pub struct AuthService {
    config: crate::config::AuthConfig,
}

impl AuthService {
    pub fn new(config: crate::config::AuthConfig) -> Self {
        Self { config }
    }

    /// Seconds until a freshly issued access token expires.
    pub fn access_token_expires_in(&self) -> i64 {
        self.config.access_token_expires_in as i64
    }

    pub fn generate_access_token(
        &self,
        employee: &Employee,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp() as u64;

        let claims = Claims {
            sub: employee.id,
            email: employee.email.clone(),
            employee_code: employee.employee_code.clone(),
            role: employee.role.clone(),
            iss: TOKEN_ISSUER.to_string(),
            exp: now + self.config.access_token_expires_in,
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn generate_refresh_token(
        &self,
        employee_id: uuid::Uuid,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp() as u64;

        let claims = RefreshClaims {
            sub: employee_id,
            iss: TOKEN_ISSUER.to_string(),
            exp: now + self.config.refresh_token_expires_in,
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
            token_type: "refresh".to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.set_issuer(&[TOKEN_ISSUER]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &validation,
        )?;

        Ok(token_data.claims)
    }

    pub fn verify_refresh_token(
        &self,
        token: &str,
    ) -> Result<RefreshClaims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.set_issuer(&[TOKEN_ISSUER]);

        let token_data = decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &validation,
        )?;

        // An access token fails deserialization above, but a forged token
        // with the right shape must still carry the refresh marker.
        if token_data.claims.token_type != "refresh" {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }

        Ok(token_data.claims)
    }
}

/// Rejects requests without a valid Bearer token and stashes the verified
/// identity in the request extensions for the handlers to extract.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<axum::body::Body>,
    next: Next<axum::body::Body>,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_str| {
            if auth_str.starts_with("Bearer ") {
                Some(auth_str[7..].to_string())
            } else {
                None
            }
        });

    let token = auth_header.ok_or_else(|| AppError::auth("Missing authorization token"))?;

    if token.is_empty() {
        return Err(AppError::auth("Missing authorization token"));
    }

    let claims = state
        .auth_service
        .verify_token(&token)
        .map_err(|_| AppError::auth("Invalid or expired token"))?;

    let employee = AuthEmployee {
        id: claims.sub,
        employee_code: claims.employee_code,
        email: claims.email,
        role: claims.role,
    };

    request.extensions_mut().insert(employee);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::enums::EmployeeStatus;

    fn test_service() -> AuthService {
        AuthService::new(crate::config::AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            access_token_expires_in: 900,
            refresh_token_expires_in: 604800,
        })
    }

    fn sample_employee() -> Employee {
        Employee {
            id: uuid::Uuid::new_v4(),
            employee_code: "EMP001".to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
            phone_number: None,
            department_id: None,
            position: Some("Engineer".to_string()),
            salary: 90000.0,
            hire_date: chrono::NaiveDate::from_ymd_opt(2023, 4, 3).unwrap(),
            status: EmployeeStatus::Active,
            street: None,
            city: None,
            state: None,
            zip_code: None,
            country: "IN".to_string(),
            password_hash: "hash".to_string(),
            role: EmployeeRole::Employee,
            last_login_at: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = test_service();
        let employee = sample_employee();

        let token = service.generate_access_token(&employee).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, employee.id);
        assert_eq!(claims.email, employee.email);
        assert_eq!(claims.employee_code, employee.employee_code);
        assert_eq!(claims.role, EmployeeRole::Employee);
        assert_eq!(claims.iss, TOKEN_ISSUER);
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let service = test_service();
        let employee_id = uuid::Uuid::new_v4();

        let token = service.generate_refresh_token(employee_id).unwrap();
        let claims = service.verify_refresh_token(&token).unwrap();

        assert_eq!(claims.sub, employee_id);
        assert_eq!(claims.token_type, "refresh");
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let service = test_service();
        let employee = sample_employee();

        let token = service.generate_access_token(&employee).unwrap();
        assert!(service.verify_refresh_token(&token).is_err());
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let service = test_service();

        let token = service
            .generate_refresh_token(uuid::Uuid::new_v4())
            .unwrap();
        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let service = test_service();
        let other = AuthService::new(crate::config::AuthConfig {
            jwt_secret: "ffffffffffffffffffffffffffffffff".to_string(),
            access_token_expires_in: 900,
            refresh_token_expires_in: 604800,
        });

        let token = service.generate_access_token(&sample_employee()).unwrap();
        assert!(other.verify_token(&token).is_err());
    }
}
