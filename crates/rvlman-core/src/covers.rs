//! GameTDB cover art client.
//!
//! Covers are fetched by title ID and cached on disk as
//! `<covers_dir>/<TITLE_ID>.png`. A cache hit never touches the network.
//! "Not found in any region" is a normal outcome (`Ok(None)`), not an
//! error; only transport-level problems after the last region surface as
//! nothing more than a log line.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const DEFAULT_COVERS_DIR: &str = "assets/covers";
pub const COVER_BASE_URL: &str = "https://art.gametdb.com/wii/cover";

/// Region codes probed in order until one of them has the cover.
pub const DEFAULT_REGION_ORDER: [&str; 4] = ["US", "EN", "EU", "JP"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CoverClient {
    client: Client,
    covers_dir: PathBuf,
}

impl CoverClient {
    pub fn new<P: Into<PathBuf>>(covers_dir: P) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            covers_dir: covers_dir.into(),
        }
    }

    pub fn covers_dir(&self) -> &Path {
        &self.covers_dir
    }

    /// Local cache path for a title's cover, whether or not it exists yet.
    pub fn cover_path(&self, title_id: &str) -> PathBuf {
        self.covers_dir.join(format!("{}.png", title_id))
    }

    /// The cached cover, if one is already on disk.
    pub fn cached(&self, title_id: &str) -> Option<PathBuf> {
        let path = self.cover_path(title_id);
        path.is_file().then_some(path)
    }

    /// Fetch a cover with the default region probe order.
    pub fn fetch(&self, title_id: &str) -> Result<Option<PathBuf>> {
        self.fetch_with_regions(title_id, &DEFAULT_REGION_ORDER)
    }

    /// Fetch a cover, probing `regions` in order. Returns the local path on
    /// the first hit, `Ok(None)` when no region has it.
    pub fn fetch_with_regions(&self, title_id: &str, regions: &[&str]) -> Result<Option<PathBuf>> {
        validate_title_id(title_id)?;

        if let Some(path) = self.cached(title_id) {
            debug!("Cover cache hit for {}", title_id);
            return Ok(Some(path));
        }

        fs::create_dir_all(&self.covers_dir)?;
        let path = self.cover_path(title_id);

        for region in regions {
            let url = format!("{}/{}/{}.png", COVER_BASE_URL, region, title_id);
            match self.client.get(&url).send() {
                Ok(response) if response.status().is_success() => {
                    let bytes = response.bytes().map_err(Error::from)?;
                    fs::write(&path, &bytes)?;
                    debug!("Downloaded cover for {} from {}", title_id, region);
                    return Ok(Some(path));
                }
                Ok(response) => {
                    debug!(
                        "No {} cover for {} (HTTP {})",
                        region,
                        title_id,
                        response.status().as_u16()
                    );
                }
                Err(err) => {
                    warn!("Cover request for {} via {} failed: {}", title_id, region, err);
                }
            }
        }

        Ok(None)
    }
}

/// Title IDs come straight out of disc headers and end up in file names and
/// URLs, so anything but plain ASCII alphanumerics is refused.
fn validate_title_id(title_id: &str) -> Result<()> {
    if title_id.is_empty() || !title_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidTitleId(title_id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_path_layout() {
        let client = CoverClient::new("assets/covers");
        assert_eq!(
            client.cover_path("RSBE01"),
            PathBuf::from("assets/covers/RSBE01.png")
        );
    }

    #[test]
    fn test_cache_hit_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let client = CoverClient::new(dir.path());

        fs::write(client.cover_path("GAFE01"), b"png bytes").unwrap();

        // No network involved: the cached file is returned as-is.
        let found = client.fetch("GAFE01").unwrap();
        assert_eq!(found, Some(client.cover_path("GAFE01")));
    }

    #[test]
    fn test_invalid_title_ids_are_refused() {
        let client = CoverClient::new("assets/covers");
        assert!(matches!(
            client.fetch(""),
            Err(Error::InvalidTitleId(_))
        ));
        assert!(matches!(
            client.fetch("../etc"),
            Err(Error::InvalidTitleId(_))
        ));
        assert!(matches!(
            client.fetch("GA FE"),
            Err(Error::InvalidTitleId(_))
        ));
    }

    #[test]
    fn test_cached_misses_on_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let client = CoverClient::new(dir.path());
        assert!(client.cached("GAFE01").is_none());
    }
}
