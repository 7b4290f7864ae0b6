use axum::{async_trait, extract::FromRequest, http::Request, Json};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

pub mod leave;
pub mod performance;

/// JSON extractor that runs `validator` rules before the handler sees
/// the payload. Malformed JSON and failed rules both surface as
/// InvalidArgument responses.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::Validation { message: "Invalid JSON format".to_string() })?;

        value.validate().map_err(|errors| {
            let messages: Vec<String> = errors
                .field_errors()
                .iter()
                .flat_map(|(field, field_errors)| {
                    field_errors.iter().map(move |error| {
                        error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Validation failed for field: {}", field))
                    })
                })
                .collect();

            AppError::Validation { message: messages.join("; ") }
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Reusable validation rules
pub mod rules {
    use validator::ValidationError;

    /// Password must satisfy at least three of: 8+ characters, a
    /// lowercase letter, an uppercase letter, a digit, a special
    /// character.
    pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
        let mut score = 0;

        if password.len() >= 8 {
            score += 1;
        }
        if password.chars().any(|c| c.is_lowercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_uppercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_numeric()) {
            score += 1;
        }
        if password.chars().any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c)) {
            score += 1;
        }

        if score < 3 {
            return Err(ValidationError::new("weak_password"));
        }

        Ok(())
    }
}
