use actix_web::web;
use cinema_listings::data_transfer::LookupResponse;
use cinema_listings::request::LookupRequest;

use crate::app_container::Application;
use crate::errors::ApiError;

#[tracing::instrument(err(level = "info"), skip(app), level = "info")]
async fn list_movies(app: web::Data<Application>) -> Result<web::Json<LookupResponse>, ApiError> {
    let movies = app.lookup.lookup(LookupRequest::List).await?;
    Ok(web::Json(movies))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_movies)));
}
