use crate::contracts::LookupEngine;
use crate::data_transfer::MovieRecord;
use crate::errors::LookupError;
use crate::request::MovieName;

impl LookupEngine {
    #[tracing::instrument(err(level = "info"), skip(self), level = "info")]
    pub fn find_movie(&self, name: &MovieName) -> Result<MovieRecord, LookupError> {
        self.catalog
            .find(name)
            .cloned()
            .ok_or(LookupError::MovieNotFound)
    }
}
