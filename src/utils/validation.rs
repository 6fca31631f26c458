use actix_web::{error::QueryPayloadError, HttpRequest};
use validator::Validate;
use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(|err| AppError::UnprocessableEntity(err.to_string()))
}

// Missing or malformed query strings get the same 422 `detail` body as failed validation
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::UnprocessableEntity(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct EmailOnly {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn test_validate_payload_accepts_email() {
        let payload = EmailOnly { email: "student@mergington.edu".to_string() };
        assert!(validate_payload(&payload).is_ok());
    }

    #[test]
    fn test_validate_payload_rejects_bad_email() {
        let payload = EmailOnly { email: "not-an-email".to_string() };
        match validate_payload(&payload) {
            Err(AppError::UnprocessableEntity(msg)) => assert!(msg.contains("Invalid email format")),
            other => panic!("expected 422 error, got {:?}", other),
        }
    }
}
