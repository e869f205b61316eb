//! Build manifest (`deploy-info.json`).
//!
//! Written once per build, after every source has been processed:
//!
//! ```json
//! {
//!   "buildTime": "2024-06-15T14:30:45.123Z",
//!   "version": "1.2.0",
//!   "files": ["index.html", "styles.css", "game.js"],
//!   "buildDir": "dist"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::date::DateTimeUtc;

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "deploy-info.json";

/// Record of a single build. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildManifest {
    pub build_time: String,
    pub version: String,
    /// Configured source list, including entries that were skipped.
    pub files: Vec<String>,
    /// Output directory as written in config.
    pub build_dir: String,
}

impl BuildManifest {
    pub fn new(time: DateTimeUtc, version: &str, files: &[PathBuf], build_dir: &Path) -> Self {
        Self {
            build_time: time.to_iso8601(),
            version: version.to_string(),
            files: files
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
            build_dir: build_dir.to_string_lossy().into_owned(),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write into `output_dir`, overwriting any previous manifest.
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(MANIFEST_FILE);
        fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write manifest `{}`", path.display()))?;
        Ok(path)
    }
}
