pub mod movies;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(movies::init_routes);
}
