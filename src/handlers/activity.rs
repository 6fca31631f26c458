use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::errors::AppError;
use crate::store::{ActivityStore, RosterError};
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
pub struct SignupQuery {
    #[validate(email(message = "Invalid email format"))]
    email: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    message: String,
}

// Signup validates the email only after this lookup so an unknown activity is always a 404.
// The store repeats the check under its write lock, this read only orders the errors.
fn ensure_activity(store: &ActivityStore, activity_name: &str) -> Result<(), AppError> {
    if !store.contains(activity_name) {
        return Err(RosterError::NotFound.into());
    }
    Ok(())
}

// GET /activities
pub async fn get_activities(store: web::Data<ActivityStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.list())
}

// POST /activities/:activityName/signup
pub async fn signup(
    store: web::Data<ActivityStore>,
    activity_name: web::Path<String>,
    query: web::Query<SignupQuery>,
) -> Result<HttpResponse, AppError> {
    let activity_name = activity_name.into_inner();
    ensure_activity(&store, &activity_name)?;
    validate_payload(&*query)?;

    let activity = store.signup(&activity_name, &query.email)?;
    info!("Signed up {} for {}", query.email, activity_name);

    if activity.participants.len() >= activity.max_participants as usize {
        warn!(
            "{} is at or over capacity ({}/{})",
            activity_name,
            activity.participants.len(),
            activity.max_participants
        );
    }

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

// DELETE /activities/:activityName/signup
pub async fn unregister(
    store: web::Data<ActivityStore>,
    activity_name: web::Path<String>,
    query: web::Query<SignupQuery>,
) -> Result<HttpResponse, AppError> {
    let activity_name = activity_name.into_inner();

    // No format check: a malformed email is never on a roster, so it reports "not registered"
    let activity = store.unregister(&activity_name, &query.email)?;
    info!(
        "Unregistered {} from {} ({} spots left)",
        query.email,
        activity_name,
        activity.spots_left()
    );

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
