//! `[deploy]` section configuration.
//!
//! The output directory is published as the sole content of `branch` on
//! `remote`, replacing the previous tip with a force-push.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! branch = "gh-pages"          # Target branch on the remote
//! remote = "origin"            # Remote alias, resolved in the project repository
//! message = "Deploy: {time}"   # `{time}` becomes an ISO-8601 timestamp at commit time
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the commit timestamp in `message`.
pub const TIME_PLACEHOLDER: &str = "{time}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Target branch for deployment.
    pub branch: String,

    /// Remote alias to push to.
    pub remote: String,

    /// Commit message template.
    pub message: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            branch: "gh-pages".to_string(),
            remote: "origin".to_string(),
            message: format!("Deploy: {TIME_PLACEHOLDER}"),
        }
    }
}

impl DeployConfig {
    pub const BRANCH: FieldPath = FieldPath::new("deploy.branch");
    pub const REMOTE: FieldPath = FieldPath::new("deploy.remote");
    pub const MESSAGE: FieldPath = FieldPath::new("deploy.message");

    /// Render the commit message for a commit made at `time`.
    pub fn commit_message(&self, time: DateTimeUtc) -> String {
        self.message.replace(TIME_PLACEHOLDER, &time.to_iso8601())
    }

    /// Validate deploy configuration.
    ///
    /// # Checks
    /// - `branch`, `remote` and `message` are non-empty
    /// - `remote` and `branch` contain no whitespace
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [(Self::BRANCH, &self.branch), (Self::REMOTE, &self.remote)] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            } else if value.chars().any(char::is_whitespace) {
                diag.error_with_hint(
                    field,
                    format!("must not contain whitespace: {value:?}"),
                    "use the name shown by `git remote` / `git branch`",
                );
            }
        }

        if self.message.trim().is_empty() {
            diag.error(Self::MESSAGE, "commit message must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProjectConfig, test_parse_config};

    #[test]
    fn test_deploy_config() {
        let config = test_parse_config(
            r#"[deploy]
branch = "pages"
remote = "upstream"
message = "publish {time}""#,
        );

        assert_eq!(config.deploy.branch, "pages");
        assert_eq!(config.deploy.remote, "upstream");
        assert_eq!(config.deploy.message, "publish {time}");
    }

    #[test]
    fn test_deploy_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.deploy.branch, "gh-pages");
        assert_eq!(config.deploy.remote, "origin");
        assert_eq!(config.deploy.message, "Deploy: {time}");
    }

    #[test]
    fn test_commit_message_renders_time() {
        let deploy = DeployConfig::default();
        let time = DateTimeUtc::from_unix_millis(1_718_461_845_123);
        assert_eq!(
            deploy.commit_message(time),
            "Deploy: 2024-06-15T14:30:45.123Z"
        );
    }

    #[test]
    fn test_commit_message_without_placeholder() {
        let deploy = DeployConfig {
            message: "static deploy".into(),
            ..DeployConfig::default()
        };
        assert_eq!(
            deploy.commit_message(DateTimeUtc::now()),
            "static deploy"
        );
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let deploy = DeployConfig {
            branch: String::new(),
            remote: "my origin".into(),
            message: " ".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        deploy.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                DeployConfig::BRANCH,
                DeployConfig::REMOTE,
                DeployConfig::MESSAGE
            ]
        );
    }

    #[test]
    fn test_deploy_unknown_field_detected() {
        let (_, ignored) = ProjectConfig::parse_with_ignored("[deploy]\nforce = true").unwrap();
        assert!(ignored.iter().any(|f| f.contains("force")));
    }
}
