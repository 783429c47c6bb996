use crate::models::Listing;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the combined document inside the output directory
pub const COMBINED_FILE: &str = "listings.json";

/// Sub-directory holding one file per listing
pub const PER_LISTING_DIR: &str = "listings";

/// Where and how listings get written
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory receiving the combined file and the per-listing directory
    pub output_dir: PathBuf,
    /// Pretty-print JSON
    pub pretty: bool,
    /// Also write `listings/<id>.json` for every listing
    pub per_listing_files: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            pretty: true,
            per_listing_files: true,
        }
    }
}

/// What a call to [`write_listings`] produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub combined: PathBuf,
    pub listing_files: usize,
    /// Listings left out of the per-listing files because of their id
    pub skipped: usize,
}

pub async fn write_listings(listings: &[Listing], options: &ExportOptions) -> Result<ExportReport> {
    tokio::fs::create_dir_all(&options.output_dir)
        .await
        .with_context(|| format!("Failed to create {}", options.output_dir.display()))?;

    let combined = options.output_dir.join(COMBINED_FILE);
    write_json(&combined, listings, options.pretty).await?;
    info!("💾 Saved {} listings to {}", listings.len(), combined.display());

    let mut report = ExportReport {
        combined,
        ..ExportReport::default()
    };

    if !options.per_listing_files {
        return Ok(report);
    }

    let dir = options.output_dir.join(PER_LISTING_DIR);
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = HashSet::new();
    for listing in listings {
        let Some(stem) = file_stem(&listing.id) else {
            warn!(id = %listing.id, title = %listing.title, "Listing id is not a usable file name, skipping");
            report.skipped += 1;
            continue;
        };
        if !written.insert(stem) {
            warn!(id = %listing.id, title = %listing.title, "Another listing already wrote {stem}.json, skipping");
            report.skipped += 1;
            continue;
        }
        let path = dir.join(format!("{stem}.json"));
        // The combined file is already on disk, one bad file must not stop the rest
        if let Err(err) = write_json(&path, listing, options.pretty).await {
            warn!(id = %listing.id, error = %err, "Could not write listing file, skipping");
            report.skipped += 1;
            continue;
        }
        debug!(path = %path.display(), "Wrote listing");
        report.listing_files += 1;
    }

    info!(
        "💾 Saved {} individual listing files to {}",
        report.listing_files,
        dir.display()
    );

    Ok(report)
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Longest stem that still fits a 255-byte file name once `.json` is added
const MAX_STEM_BYTES: usize = 250;

/// Ids are free text, only some of them can name a file
fn file_stem(id: &str) -> Option<&str> {
    let id = id.trim();
    if id.is_empty()
        || id == "."
        || id == ".."
        || id.len() > MAX_STEM_BYTES
        || id.contains(['/', '\\', '\0'])
    {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::file_stem;

    #[test]
    fn accepts_plain_ids() {
        assert_eq!(file_stem("bike_42"), Some("bike_42"));
        assert_eq!(file_stem(" 65f1c0ab "), Some("65f1c0ab"));
    }

    #[test]
    fn rejects_path_like_ids() {
        assert_eq!(file_stem(""), None);
        assert_eq!(file_stem("   "), None);
        assert_eq!(file_stem(".."), None);
        assert_eq!(file_stem("a/b"), None);
        assert_eq!(file_stem("a\\b"), None);
        assert_eq!(file_stem("a\0b"), None);
    }

    #[test]
    fn rejects_ids_too_long_for_a_file_name() {
        let longest = "a".repeat(250);
        assert_eq!(file_stem(&longest), Some(longest.as_str()));
        assert_eq!(file_stem(&"a".repeat(251)), None);
        assert_eq!(file_stem(&"a".repeat(300)), None);
    }
}
