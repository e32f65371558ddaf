use shared_kernel::non_empty_string;

use crate::errors::LookupError;

non_empty_string!(MovieName);

impl MovieName {
    /// Only the literal `%20` escape is decoded; anything else is taken verbatim.
    pub fn from_segment(segment: &str) -> Result<Self, LookupError> {
        MovieName::try_from(segment.replace("%20", " ")).map_err(|_| LookupError::MovieNotFound)
    }

    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase() == self.0.to_lowercase()
    }
}

/// Lowercased region name; doubles as the region document's file stem.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RegionKey(String);

impl RegionKey {
    pub fn from_segment(segment: &str) -> Self {
        RegionKey(segment.to_lowercase())
    }

    /// The form region names take inside a movie's `regions` list.
    pub fn display_name(&self) -> String {
        capitalize(&self.0)
    }
}

impl AsRef<str> for RegionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SubCityKey(String);

impl SubCityKey {
    pub fn from_segment(segment: &str) -> Self {
        SubCityKey(segment.to_lowercase())
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.0)
    }
}

impl AsRef<str> for SubCityKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubCityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One variant per URL shape, with every segment already normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupRequest {
    List,
    ByName {
        name: MovieName,
    },
    ByNameRegion {
        name: MovieName,
        region: RegionKey,
    },
    ByNameRegionSubCity {
        name: MovieName,
        region: RegionKey,
        sub_city: SubCityKey,
    },
}

impl LookupRequest {
    pub fn by_name(name: &str) -> Result<Self, LookupError> {
        Ok(LookupRequest::ByName {
            name: MovieName::from_segment(name)?,
        })
    }

    pub fn by_name_and_region(name: &str, region: &str) -> Result<Self, LookupError> {
        Ok(LookupRequest::ByNameRegion {
            name: MovieName::from_segment(name)?,
            region: RegionKey::from_segment(region),
        })
    }

    pub fn by_name_region_and_sub_city(
        name: &str,
        region: &str,
        sub_city: &str,
    ) -> Result<Self, LookupError> {
        Ok(LookupRequest::ByNameRegionSubCity {
            name: MovieName::from_segment(name)?,
            region: RegionKey::from_segment(region),
            sub_city: SubCityKey::from_segment(sub_city),
        })
    }
}

/// First character upper-cased, the rest lower-cased. Not locale aware.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
