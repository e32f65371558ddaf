use actix_web::web;

pub mod list_movies;
pub mod movie_by_name;
pub mod movie_in_region;
pub mod movie_in_sub_city;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/movies")
            .configure(list_movies::init_routes)
            .configure(movie_by_name::init_routes)
            .configure(movie_in_region::init_routes)
            .configure(movie_in_sub_city::init_routes),
    );
}
