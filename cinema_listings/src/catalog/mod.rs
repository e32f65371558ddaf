use std::path::Path;

use anyhow::{anyhow, Context};
use serde_json::Value;

use crate::data_transfer::MovieRecord;
use crate::request::MovieName;

/// The movie catalog. Built once before the server starts and only read afterwards.
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    #[tracing::instrument(err, level = "info")]
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read(path)
            .with_context(|| format!("Failed to read the movie catalog at {}", path.display()))?;
        let mut document: Value = serde_json::from_slice(&contents)
            .with_context(|| format!("Failed to parse the movie catalog at {}", path.display()))?;
        let movies = document
            .get_mut("movies")
            .map(Value::take)
            .ok_or_else(|| anyhow!("The movie catalog at {} has no `movies` field", path.display()))?;
        let movies: Vec<MovieRecord> = serde_json::from_value(movies).with_context(|| {
            format!(
                "The `movies` field of the catalog at {} must be a list of objects",
                path.display()
            )
        })?;
        tracing::info!(movies = movies.len(), "Loaded movie catalog");
        Ok(Self::from_movies(movies))
    }

    pub fn from_movies(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// First record whose title matches, in load order.
    pub fn find(&self, name: &MovieName) -> Option<&MovieRecord> {
        self.movies
            .iter()
            .find(|movie| movie.title().map(|title| name.matches(title)).unwrap_or_default())
    }
}
