//! HTTP route registration shared by the server and the handler tests.

use actix_web::web;

use crate::handlers;
use crate::utils::validation::query_error_handler;

/// Register the activity routes and the root redirect.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::resource("/")
                .route(web::get().to(handlers::root::index)),
        )
        .service(
            web::resource("/activities")
                .route(web::get().to(handlers::activity::get_activities)),
        )
        .service(
            web::resource("/activities/{activity_name}/signup")
                .route(web::post().to(handlers::activity::signup))
                .route(web::delete().to(handlers::activity::unregister)),
        );
}
