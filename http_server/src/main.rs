use std::sync::Arc;

use crate::app_container::Application;
use crate::authentication::require_api_key;
use crate::configuration::Settings;
use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use cinema_listings::access::StaticApiKey;
use cinema_listings::catalog::Catalog;
use cinema_listings::contracts::LookupEngine;
use cinema_listings::region_resolver::RegionDirectory;
use tracing_actix_web::TracingLogger;

mod app_container;
mod authentication;
mod configuration;
mod errors;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::parse()?;
    shared_kernel::tracing::config_telemetry(
        &settings.telemetry.service_name,
        settings.telemetry.export_traces,
    )?;
    let result = start(settings).await;
    shared_kernel::tracing::shutdown_global_tracer_provider();
    result
}

async fn start(settings: Settings) -> anyhow::Result<()> {
    let regions = RegionDirectory::new(settings.data.region_directory);
    regions.ensure_exists()?;

    // The catalog is complete before the listener exists, so no request can see it half-loaded.
    let catalog = Catalog::load(&settings.data.catalog_file)?;
    let lookup = LookupEngine::new(Arc::new(catalog), Arc::new(regions));
    let credentials = Arc::new(StaticApiKey::new(settings.application.api_key));
    let app = web::Data::new(Application::new(lookup, credentials));

    let address = (settings.application.host, settings.application.port);
    tracing::info!(host = %address.0, port = address.1, "Starting cinema listings server");

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(require_api_key))
            .wrap(TracingLogger::default())
            .configure(routes::config)
            .app_data(app.clone())
    })
    .bind(address)?
    .run()
    .await
    .context("Server failed to run")
}
