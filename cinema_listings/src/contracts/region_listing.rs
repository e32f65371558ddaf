use crate::contracts::LookupEngine;
use crate::data_transfer::{MovieRecord, RegionDocument, RegionListing};
use crate::errors::LookupError;
use crate::region_resolver::RegionResolveError;
use crate::request::{MovieName, RegionKey};

impl LookupEngine {
    #[tracing::instrument(err(level = "info"), skip(self), level = "info")]
    pub async fn region_listing(
        &self,
        name: &MovieName,
        region: &RegionKey,
    ) -> Result<RegionListing, LookupError> {
        let (movie, document) = self.movie_in_region(name, region).await?;

        Ok(RegionListing {
            movie,
            region: document.region,
            sub_cities: document.sub_cities.unwrap_or_default(),
            cinemas: document.cinemas.unwrap_or_default(),
        })
    }

    pub(crate) async fn movie_in_region(
        &self,
        name: &MovieName,
        region: &RegionKey,
    ) -> Result<(MovieRecord, RegionDocument), LookupError> {
        let movie = self.find_movie(name)?;

        if !movie.is_showing_in(&region.display_name()) {
            return Err(LookupError::NotAvailableInRegion {
                movie: name.inner(),
                region: region.to_string(),
            });
        }

        let document = self.regions.load(region).await.map_err(|err| {
            // A broken document is reported like a missing one; keep the cause visible here.
            match &err {
                RegionResolveError::NotFound(_) => tracing::info!(error = %err, "Region document missing"),
                _ => tracing::warn!(error = ?err, "Region document could not be used"),
            }
            LookupError::RegionNotFound {
                region: region.to_string(),
            }
        })?;

        Ok((movie, document))
    }
}
