//! Dotted config field path.

/// A config field path such as `deploy.branch`.
///
/// Sections expose their paths as associated constants:
///
/// ```ignore
/// diag.error(DeployConfig::BRANCH, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
