//! Asset kind definitions.

use std::path::Path;

/// Kind of source asset, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// `.html`, `.htm`
    Html,
    /// `.css`
    Css,
    /// `.js`, `.mjs`
    Js,
    /// Anything else, copied byte-for-byte.
    Other,
}

impl AssetKind {
    /// Classify a path by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Self::Html,
            "css" => Self::Css,
            "js" | "mjs" => Self::Js,
            _ => Self::Other,
        }
    }

    /// Whether this kind has a text transform.
    pub const fn is_minifiable(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Short label used in build logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
            Self::Other => "copy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AssetKind::from_path(Path::new("index.html")), AssetKind::Html);
        assert_eq!(AssetKind::from_path(Path::new("old/page.htm")), AssetKind::Html);
        assert_eq!(AssetKind::from_path(Path::new("styles.css")), AssetKind::Css);
        assert_eq!(AssetKind::from_path(Path::new("game.js")), AssetKind::Js);
        assert_eq!(AssetKind::from_path(Path::new("mod.mjs")), AssetKind::Js);
        assert_eq!(AssetKind::from_path(Path::new("logo.png")), AssetKind::Other);
        assert_eq!(AssetKind::from_path(Path::new("CNAME")), AssetKind::Other);
    }

    #[test]
    fn test_from_path_ignores_case() {
        assert_eq!(AssetKind::from_path(Path::new("INDEX.HTML")), AssetKind::Html);
        assert_eq!(AssetKind::from_path(Path::new("Game.Js")), AssetKind::Js);
    }

    #[test]
    fn test_only_other_is_copied() {
        assert!(AssetKind::Html.is_minifiable());
        assert!(AssetKind::Css.is_minifiable());
        assert!(AssetKind::Js.is_minifiable());
        assert!(!AssetKind::Other.is_minifiable());
    }
}
