mod handlers;
mod models;
mod routes;
mod store;
mod utils;
mod errors;

use actix_web::{web, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use dotenv::dotenv;
use log::info;
use env_logger::Env;
use actix_web::middleware::Logger;
use std::collections::HashMap;
use crate::store::ActivityStore;
use crate::utils::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    // One store for the whole process, shared by every worker
    let store = web::Data::new(ActivityStore::seeded());
    info!("Loaded {} activities", store.list().len());

    // Set up Prometheus metrics
    let mut labels = HashMap::new();
    labels.insert("app".to_string(), "mergington_activities".to_string());
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .const_labels(labels)
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;

    info!("Starting server at {} with {} workers", config.bind_address, config.workers);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(prometheus.clone())
            .app_data(store.clone())
            .configure(routes::configure)
            .default_service(web::to(handlers::root::not_found))
    })
    .workers(config.workers)
    .bind(&config.bind_address)?
    .run()
    .await
}
