use actix_web::web;
use cinema_listings::data_transfer::LookupResponse;
use cinema_listings::request::LookupRequest;

use crate::app_container::Application;
use crate::errors::ApiError;

#[tracing::instrument(err(level = "info"), skip(app), level = "info")]
async fn movie_in_sub_city(
    path: web::Path<(String, String, String)>,
    app: web::Data<Application>,
) -> Result<web::Json<LookupResponse>, ApiError> {
    let (name, region, sub_city) = path.into_inner();
    let request = LookupRequest::by_name_region_and_sub_city(&name, &region, &sub_city)?;
    let listing = app.lookup.lookup(request).await?;
    Ok(web::Json(listing))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{name}/{region}/{sub_city}").route(web::get().to(movie_in_sub_city)),
    );
}
