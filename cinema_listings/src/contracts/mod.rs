use std::sync::Arc;

use crate::catalog::Catalog;
use crate::data_transfer::LookupResponse;
use crate::errors::LookupError;
use crate::region_resolver::RegionSource;
use crate::request::LookupRequest;

pub mod find_movie;
pub mod list_movies;
pub mod region_listing;
pub mod sub_city_listing;

/// Answers lookups against the frozen catalog and on-demand region documents.
#[derive(Clone)]
pub struct LookupEngine {
    catalog: Arc<Catalog>,
    regions: Arc<dyn RegionSource>,
}

impl LookupEngine {
    pub fn new(catalog: Arc<Catalog>, regions: Arc<dyn RegionSource>) -> Self {
        Self { catalog, regions }
    }

    pub async fn lookup(&self, request: LookupRequest) -> Result<LookupResponse, LookupError> {
        match request {
            LookupRequest::List => Ok(LookupResponse::Movies(self.list_movies())),
            LookupRequest::ByName { name } => self.find_movie(&name).map(LookupResponse::Movie),
            LookupRequest::ByNameRegion { name, region } => self
                .region_listing(&name, &region)
                .await
                .map(LookupResponse::Region),
            LookupRequest::ByNameRegionSubCity {
                name,
                region,
                sub_city,
            } => self
                .sub_city_listing(&name, &region, &sub_city)
                .await
                .map(LookupResponse::SubCity),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use serde_json::json;

    use super::LookupEngine;
    use crate::catalog::Catalog;
    use crate::data_transfer::{MovieRecord, RegionDocument};
    use crate::region_resolver::{MockRegionSource, RegionResolveError};

    pub fn catalog() -> Catalog {
        let movies: Vec<MovieRecord> = serde_json::from_value(json!([
            { "title": "Dune", "regions": ["Lagos", "Abuja"], "genre": "Sci-Fi" },
            { "title": "The Dark Knight", "regions": ["Lagos"] },
            { "title": "Inception" }
        ]))
        .unwrap();
        Catalog::from_movies(movies)
    }

    pub fn lagos() -> RegionDocument {
        serde_json::from_value(json!({
            "region": "Lagos",
            "sub_cities": ["Ikeja", "Lekki", "Surulere"],
            "cinemas": [
                { "sub_city": "Ikeja", "name": "CinemaX" },
                { "sub_city": "lekki", "name": "Filmhouse" },
                { "sub_city": "IKEJA", "name": "Genesis" },
                { "name": "Unassigned" }
            ]
        }))
        .unwrap()
    }

    /// Serves `lagos` and reports every other region as missing.
    pub fn engine() -> LookupEngine {
        let mut regions = MockRegionSource::new();
        regions.expect_load().returning(|region| {
            if region.as_ref() == "lagos" {
                Ok(lagos())
            } else {
                Err(RegionResolveError::NotFound(
                    format!("{region}.json").into(),
                ))
            }
        });
        engine_with(regions)
    }

    pub fn engine_with(regions: MockRegionSource) -> LookupEngine {
        LookupEngine::new(Arc::new(catalog()), Arc::new(regions))
    }
}
