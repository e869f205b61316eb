//! Project metadata from `package.json`.
//!
//! Only the fields used for reporting and remote resolution are read:
//!
//! ```json
//! {
//!   "name": "happy-crush-deluxe",
//!   "version": "1.2.0",
//!   "homepage": "https://user.github.io/happy-crush-deluxe",
//!   "repository": { "type": "git", "url": "https://github.com/user/happy-crush-deluxe.git" }
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// `repository` may be a bare URL string or an object with a `url` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Repository {
    Url(String),
    Detailed {
        #[serde(default)]
        url: Option<String>,
    },
}

impl Repository {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url.as_str()),
            Self::Detailed { url } => url.as_deref(),
        }
        .filter(|url| !url.trim().is_empty())
    }
}

/// Subset of `package.json` this tool reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

impl ProjectMeta {
    /// Read and parse the metadata file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project metadata `{}`", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid project metadata `{}`", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Repository URL, or a placeholder derived from the project name.
    pub fn repository_url(&self) -> String {
        self.repository
            .as_ref()
            .and_then(Repository::url)
            .map_or_else(
                || format!("https://github.com/yourusername/{}.git", self.name),
                String::from,
            )
    }

    /// Homepage URL, or a placeholder derived from the project name.
    pub fn homepage_url(&self) -> String {
        self.homepage
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map_or_else(
                || format!("https://yourusername.github.io/{}", self.name),
                String::from,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_metadata() {
        let meta = ProjectMeta::parse(
            r#"{
                "name": "happy-crush-deluxe",
                "version": "1.2.0",
                "homepage": "https://me.github.io/happy-crush-deluxe",
                "repository": { "type": "git", "url": "https://github.com/me/happy-crush-deluxe.git" },
                "scripts": { "build": "node build.js" }
            }"#,
        )
        .unwrap();

        assert_eq!(meta.name, "happy-crush-deluxe");
        assert_eq!(meta.version, "1.2.0");
        assert_eq!(
            meta.repository_url(),
            "https://github.com/me/happy-crush-deluxe.git"
        );
        assert_eq!(meta.homepage_url(), "https://me.github.io/happy-crush-deluxe");
    }

    #[test]
    fn test_repository_as_string() {
        let meta = ProjectMeta::parse(
            r#"{"name": "g", "version": "0.1.0", "repository": "git@github.com:me/g.git"}"#,
        )
        .unwrap();
        assert_eq!(meta.repository_url(), "git@github.com:me/g.git");
    }

    #[test]
    fn test_placeholders_when_missing() {
        let meta = ProjectMeta::parse(r#"{"name": "game", "version": "0.1.0"}"#).unwrap();
        assert_eq!(
            meta.repository_url(),
            "https://github.com/yourusername/game.git"
        );
        assert_eq!(meta.homepage_url(), "https://yourusername.github.io/game");

        let meta = ProjectMeta::parse(
            r#"{"name": "game", "version": "0.1.0", "homepage": "", "repository": {"type": "git"}}"#,
        )
        .unwrap();
        assert_eq!(
            meta.repository_url(),
            "https://github.com/yourusername/game.git"
        );
        assert_eq!(meta.homepage_url(), "https://yourusername.github.io/game");
    }

    #[test]
    fn test_missing_version_is_error() {
        assert!(ProjectMeta::parse(r#"{"name": "game"}"#).is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        let err = ProjectMeta::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("package.json"));
    }
}
