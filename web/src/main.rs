#![warn(clippy::all)]

use std::io;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use db::{SqliteComposer, Store};

use crate::settings::Settings;

/// Represents the [server data](actix_web::web::Data) for the application.
pub struct ServerData {
    pub store: Store,
}

/// Allows any origin to read the API. Nothing but `GET` is served.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(3600)
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    // Set up logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get env configuration
    let settings =
        Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Set up sentry
    let _guard = sentry::init((
        settings.sentry_dsn.clone(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let store = Store::new(settings.store.clone());
    if !store.path().is_file() {
        warn!(
            "No Bible database at {}; requests will fail until it exists",
            store.path().display()
        );
    }

    info!(
        "Serving {} on {}:{} with {} workers",
        store.path().display(),
        settings.host,
        settings.port,
        settings.workers
    );

    HttpServer::new(move || {
        // Wire up the application
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(cors())
            .wrap(middleware::NormalizePath::trim())
            .wrap(sentry_actix::Sentry::new())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(ServerData {
                store: store.clone(),
            }))
            .configure(controllers::configure::<SqliteComposer>)
            .default_service(web::route().to(controllers::not_found))
    })
    .workers(settings.workers)
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}

mod controllers;
mod error;
mod responder;
mod settings;
