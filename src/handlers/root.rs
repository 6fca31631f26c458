use actix_web::{http::header, HttpResponse};
use crate::errors::AppError;

pub const INDEX_PAGE: &str = "/static/index.html";

// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, INDEX_PAGE))
        .finish()
}

// Fallback for unmatched routes
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Not Found".to_string()))
}
