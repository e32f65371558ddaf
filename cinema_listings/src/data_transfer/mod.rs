use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry, kept exactly as it appeared in the catalog document.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct MovieRecord(Map<String, Value>);

impl MovieRecord {
    /// `None` when the entry has no string `title`; such entries never match a lookup.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// `region` must already be in display form (`Lagos`); the comparison is exact.
    pub fn is_showing_in(&self, region: &str) -> bool {
        self.0
            .get("regions")
            .and_then(Value::as_array)
            .map(|regions| regions.iter().any(|candidate| candidate.as_str() == Some(region)))
            .unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CinemaRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_city: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl CinemaRecord {
    pub fn is_in_sub_city(&self, sub_city: &str) -> bool {
        self.sub_city
            .as_deref()
            .map(|candidate| candidate.to_lowercase() == sub_city)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RegionDocument {
    pub region: String,
    pub sub_cities: Option<Vec<String>>,
    pub cinemas: Option<Vec<CinemaRecord>>,
}

impl RegionDocument {
    /// A document without a `sub_cities` list accepts every sub-city.
    pub fn declares_sub_city(&self, sub_city: &str) -> bool {
        match &self.sub_cities {
            Some(sub_cities) => sub_cities
                .iter()
                .any(|candidate| candidate.to_lowercase() == sub_city),
            None => true,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MovieListing {
    pub movies: Vec<MovieRecord>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RegionListing {
    pub movie: MovieRecord,
    pub region: String,
    pub sub_cities: Vec<String>,
    pub cinemas: Vec<CinemaRecord>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SubCityListing {
    pub movie: MovieRecord,
    pub region: String,
    pub sub_city: String,
    pub cinemas: Vec<CinemaRecord>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum LookupResponse {
    Movies(MovieListing),
    Movie(MovieRecord),
    Region(RegionListing),
    SubCity(SubCityListing),
}
