use std::io;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::data_transfer::RegionDocument;
use crate::request::RegionKey;

#[derive(Error, Debug)]
pub enum RegionResolveError {
    #[error("Region document {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read region document {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Region document {} is malformed", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegionSource: Send + Sync {
    async fn load(&self, region: &RegionKey) -> Result<RegionDocument, RegionResolveError>;
}

/// Region documents stored as `{directory}/{region}.json`. Nothing is cached,
/// so every call sees the file as it is on disk right now.
#[derive(Clone, Debug)]
pub struct RegionDirectory {
    directory: PathBuf,
}

impl RegionDirectory {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn ensure_exists(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.directory).with_context(|| {
            format!(
                "Failed to create the region directory {}",
                self.directory.display()
            )
        })
    }

    fn path_for(&self, region: &RegionKey) -> PathBuf {
        self.directory.join(format!("{region}.json"))
    }
}

#[async_trait]
impl RegionSource for RegionDirectory {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn load(&self, region: &RegionKey) -> Result<RegionDocument, RegionResolveError> {
        let path = self.path_for(region);
        // Keys come straight from the URL; never let one escape the directory.
        if region.as_ref().contains(['/', '\\']) {
            return Err(RegionResolveError::NotFound(path));
        }

        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RegionResolveError::NotFound(path))
            }
            Err(source) => return Err(RegionResolveError::Unreadable { path, source }),
        };

        serde_json::from_slice(&contents)
            .map_err(|source| RegionResolveError::Malformed { path, source })
    }
}
