//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "dist"                                   # Output directory (relative to project root)
//! sources = ["index.html", "styles.css", "game.js"] # Processed in this order
//! metadata = "package.json"                         # Supplies name/version/homepage/repository
//! minify = true                                     # false copies every source verbatim
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build output directory, as written in config (reported verbatim in the manifest).
    pub output: PathBuf,

    /// Ordered source files, relative to the project root.
    pub sources: Vec<PathBuf>,

    /// Project metadata file.
    pub metadata: PathBuf,

    /// Apply per-extension minification.
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "dist".into(),
            sources: vec!["index.html".into(), "styles.css".into(), "game.js".into()],
            metadata: "package.json".into(),
            minify: true,
        }
    }
}

impl BuildConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");
    pub const SOURCES: FieldPath = FieldPath::new("build.sources");
    pub const METADATA: FieldPath = FieldPath::new("build.metadata");

    /// Validate build configuration.
    ///
    /// # Checks
    /// - `output` is non-empty and relative
    /// - `sources` is non-empty and has no empty entries
    /// - `metadata` is non-empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error(Self::OUTPUT, "output directory must not be empty");
        } else if self.output.is_absolute() {
            diag.error_with_hint(
                Self::OUTPUT,
                format!("must be relative: {}", self.output.display()),
                "the output directory is resolved against the project root",
            );
        }

        if self.sources.is_empty() {
            diag.error_with_hint(
                Self::SOURCES,
                "no source files configured",
                "add e.g. `sources = [\"index.html\"]`",
            );
        } else if self.sources.iter().any(|p| p.as_os_str().is_empty()) {
            diag.error(Self::SOURCES, "source entries must not be empty");
        }

        if self.metadata.as_os_str().is_empty() {
            diag.error(Self::METADATA, "metadata file must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_build_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, Path::new("dist"));
        assert_eq!(
            config.build.sources,
            vec![
                PathBuf::from("index.html"),
                PathBuf::from("styles.css"),
                PathBuf::from("game.js")
            ]
        );
        assert_eq!(config.build.metadata, Path::new("package.json"));
        assert!(config.build.minify);
    }

    #[test]
    fn test_build_config_custom() {
        let config = test_parse_config(
            r#"[build]
output = "public"
sources = ["a.html", "b.css"]
minify = false"#,
        );
        assert_eq!(config.build.output, Path::new("public"));
        assert_eq!(config.build.sources.len(), 2);
        assert!(!config.build.minify);
        // Unset fields keep defaults
        assert_eq!(config.build.metadata, Path::new("package.json"));
    }

    #[test]
    fn test_validate_defaults_pass() {
        let mut diag = ConfigDiagnostics::new();
        BuildConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_empty_sources_and_absolute_output() {
        let config = BuildConfig {
            output: PathBuf::from("/var/www"),
            sources: Vec::new(),
            ..BuildConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert!(fields.contains(&BuildConfig::OUTPUT));
        assert!(fields.contains(&BuildConfig::SOURCES));
    }
}
