use crate::contracts::LookupEngine;
use crate::data_transfer::MovieListing;

impl LookupEngine {
    #[tracing::instrument(skip(self), level = "info")]
    pub fn list_movies(&self) -> MovieListing {
        MovieListing {
            movies: self.catalog.movies().to_vec(),
        }
    }
}
