use itertools::Itertools;

use crate::contracts::LookupEngine;
use crate::data_transfer::SubCityListing;
use crate::errors::LookupError;
use crate::request::{MovieName, RegionKey, SubCityKey};

impl LookupEngine {
    #[tracing::instrument(err(level = "info"), skip(self), level = "info")]
    pub async fn sub_city_listing(
        &self,
        name: &MovieName,
        region: &RegionKey,
        sub_city: &SubCityKey,
    ) -> Result<SubCityListing, LookupError> {
        let (movie, document) = self.movie_in_region(name, region).await?;

        if !document.declares_sub_city(sub_city.as_ref()) {
            return Err(LookupError::SubCityNotFound {
                sub_city: sub_city.to_string(),
                region: region.to_string(),
            });
        }

        let cinemas = document
            .cinemas
            .unwrap_or_default()
            .into_iter()
            .filter(|cinema| cinema.is_in_sub_city(sub_city.as_ref()))
            .collect_vec();

        if cinemas.is_empty() {
            return Err(LookupError::NoCinemasInSubCity {
                sub_city: sub_city.to_string(),
            });
        }

        Ok(SubCityListing {
            movie,
            region: document.region,
            sub_city: sub_city.display_name(),
            cinemas,
        })
    }
}
