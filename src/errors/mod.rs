use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::store::RosterError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    UnprocessableEntity(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl AppError {
    fn detail(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::UnprocessableEntity(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::UnprocessableEntity(msg) => write!(f, "Unprocessable Entity: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse { detail: self.detail().to_string() };
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(body),
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(body),
            AppError::UnprocessableEntity(_) => HttpResponse::UnprocessableEntity().json(body),
        }
    }
}

// Unknown activity is a 404, every roster conflict is a plain 400
impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::NotFound => AppError::NotFound(err.to_string()),
            RosterError::AlreadyRegistered | RosterError::NotRegistered => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};

    #[actix_web::test]
    async fn test_roster_errors_map_to_status_codes() {
        let cases = [
            (RosterError::NotFound, StatusCode::NOT_FOUND, "not found"),
            (RosterError::AlreadyRegistered, StatusCode::BAD_REQUEST, "already signed up"),
            (RosterError::NotRegistered, StatusCode::BAD_REQUEST, "not registered"),
        ];

        for (err, status, needle) in cases {
            let resp = AppError::from(err).error_response();
            assert_eq!(resp.status(), status);

            let body = to_bytes(resp.into_body()).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            let detail = json["detail"].as_str().unwrap().to_lowercase();
            assert!(detail.contains(needle), "{detail:?} should contain {needle:?}");
        }
    }

    #[actix_web::test]
    async fn test_validation_error_is_unprocessable() {
        let resp = AppError::UnprocessableEntity("email: Invalid email format".to_string())
            .error_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
