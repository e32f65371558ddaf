use thiserror::Error;

/// Every way a lookup can come up empty. All of them are client-facing "not found" outcomes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("Movie not found")]
    MovieNotFound,
    #[error("Movie '{movie}' not available in region '{region}'")]
    NotAvailableInRegion { movie: String, region: String },
    #[error("Region '{region}' not found")]
    RegionNotFound { region: String },
    #[error("Sub-city '{sub_city}' not found in region '{region}'")]
    SubCityNotFound { sub_city: String, region: String },
    #[error("No cinemas found in sub-city '{sub_city}'")]
    NoCinemasInSubCity { sub_city: String },
}
