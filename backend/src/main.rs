mod config;
mod error;
mod services;
mod store;
mod views;

use crate::config::AppConfig;
use crate::store::ArticleStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let store = ArticleStore::open(&config.database)
        .map_err(|e| io::Error::other(format!("cannot open {}: {}", config.database, e)))?;
    let store = web::Data::new(store);
    info!("News store opened at {}", config.database);

    let json_limit = config.json_limit;
    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(|cfg| services::configure(cfg, json_limit))
            .default_service(web::route().to(services::not_found))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
