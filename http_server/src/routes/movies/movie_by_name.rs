use actix_web::web;
use cinema_listings::data_transfer::LookupResponse;
use cinema_listings::request::LookupRequest;

use crate::app_container::Application;
use crate::errors::ApiError;

#[tracing::instrument(err(level = "info"), skip(app), level = "info")]
async fn movie_by_name(
    path: web::Path<String>,
    app: web::Data<Application>,
) -> Result<web::Json<LookupResponse>, ApiError> {
    let request = LookupRequest::by_name(&path)?;
    let movie = app.lookup.lookup(request).await?;
    Ok(web::Json(movie))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{name}").route(web::get().to(movie_by_name)));
}
