use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::export::ExportOptions;

/// Settings for the export binary, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON array of listings; the sample catalogue is used when unset
    pub input: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub per_listing_files: bool,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = ExportOptions::default();
        let input = env::var("LISTINGS_INPUT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let output_dir = env::var("LISTINGS_OUTPUT_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let per_listing_files = bool_var("LISTINGS_PER_FILE", defaults.per_listing_files);
        let pretty = bool_var("LISTINGS_PRETTY", defaults.pretty);
        Ok(Self {
            input,
            output_dir,
            per_listing_files,
            pretty,
        })
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            output_dir: self.output_dir.clone(),
            pretty: self.pretty,
            per_listing_files: self.per_listing_files,
        }
    }
}

fn bool_var(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => parse_bool(&raw).unwrap_or_else(|| {
            tracing::warn!(key, value = %raw, default, "invalid boolean, using default");
            default
        }),
        Err(_) => default,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn parses_truthy_values() {
        for raw in ["1", "true", "YES", " on "] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
    }

    #[test]
    fn parses_falsy_values() {
        for raw in ["0", "False", "no", "OFF"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
    }

    #[test]
    fn rejects_anything_else() {
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("maybe"), None);
    }
}
