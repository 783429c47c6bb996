use crate::models::Listing;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Reads a JSON array of listings from disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!(path = %self.path.display(), "Reading listings file");

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        debug!("Read {} bytes", raw.len());

        let listings: Vec<Listing> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse listings in {}", self.path.display()))?;

        if listings.is_empty() {
            warn!(path = %self.path.display(), "Listings file is empty");
        }

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::io::Write;

    #[tokio::test]
    async fn loads_listings_from_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"a","brand":"Ducati","category":"SPORT"}},{{"id":"b","images":["x.jpg"]}}]"#
        )
        .unwrap();

        let listings = JsonFileSource::new(file.path()).load().await.unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].brand, "Ducati");
        assert_eq!(listings[0].category, Some(Category::Sport));
        assert_eq!(listings[1].images, vec!["x.jpg"]);
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = JsonFileSource::new(&path).load().await.unwrap_err();

        assert!(err.to_string().contains("nope.json"));
    }

    #[tokio::test]
    async fn rejects_unknown_labels() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"a","condition":"Like New"}}]"#).unwrap();

        let err = JsonFileSource::new(file.path()).load().await.unwrap_err();

        assert!(err.to_string().contains("Failed to parse listings"));
    }
}
