//! Regex-based minification for HTML, CSS and JS.
//!
//! These are textual transforms, not parsers. They know nothing about
//! string, template or regex literals, so a literal containing `/*`, `//`
//! or `<!--` is mangled. Sources are expected to avoid such literals.
//!
//! A leading byte-order mark is dropped before minifying; `\s` does not
//! match U+FEFF.

use std::sync::LazyLock;

use regex::Regex;

use super::AssetKind;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)//.*$").unwrap());
static SEMI_BEFORE_BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s*\}").unwrap());
static OPEN_BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\{\s*").unwrap());
static SEMI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s*").unwrap());

const BOM: char = '\u{feff}';

/// Minify HTML: drop comments, collapse whitespace, join adjacent tags.
pub fn minify_html(source: &str) -> String {
    let out = HTML_COMMENT.replace_all(source, "");
    let out = WHITESPACE.replace_all(&out, " ");
    out.replace("> <", "><")
}

/// Minify CSS: drop comments, collapse whitespace, tighten braces and semicolons.
pub fn minify_css(source: &str) -> String {
    let out = BLOCK_COMMENT.replace_all(source, "");
    let out = WHITESPACE.replace_all(&out, " ");
    let out = SEMI_BEFORE_BRACE.replace_all(&out, "}");
    let out = OPEN_BRACE.replace_all(&out, "{");
    let out = SEMI.replace_all(&out, ";");
    out.trim().to_string()
}

/// Minify JS: drop block and line comments, collapse whitespace.
///
/// `//` inside a string (e.g. a URL) starts a "comment" here too.
pub fn minify_js(source: &str) -> String {
    let out = BLOCK_COMMENT.replace_all(source, "");
    let out = LINE_COMMENT.replace_all(&out, "");
    let out = WHITESPACE.replace_all(&out, " ");
    let out = SEMI_BEFORE_BRACE.replace_all(&out, "}");
    out.trim().to_string()
}

/// Minify content for the given kind.
///
/// Returns `None` for kinds without a text transform.
pub fn minify_by_kind(kind: AssetKind, content: &str) -> Option<String> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    match kind {
        AssetKind::Html => Some(minify_html(content)),
        AssetKind::Css => Some(minify_css(content)),
        AssetKind::Js => Some(minify_js(content)),
        AssetKind::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = "<!DOCTYPE html>\n<html>\n  <!-- header\n       spans lines -->\n  <head>\n    <title>Happy   Crush</title>\n  </head>\n  <body>\n    <div id=\"board\"></div>  <!-- board -->\n  </body>\n</html>\n";

    const CSS: &str = "/* theme */\nbody {\n  margin: 0;\n  color: #333;\n}\n\n.tile  {  width: 32px; /* fixed */ }\n";

    const JS: &str = "/* entry\n * point */\nfunction start() {\n  // init board\n  const size = 8; // cells\n  return size;\n}\nstart();\n";

    #[test]
    fn test_minify_html() {
        let out = minify_html(HTML);
        assert_eq!(
            out,
            "<!DOCTYPE html><html><head><title>Happy Crush</title></head><body><div id=\"board\"></div></body></html> "
        );
        assert!(!out.contains("<!--"));
    }

    #[test]
    fn test_minify_html_keeps_text_spacing() {
        assert_eq!(minify_html("<p>a\n\n  b</p>"), "<p>a b</p>");
    }

    #[test]
    fn test_minify_css() {
        assert_eq!(
            minify_css(CSS),
            "body{margin: 0;color: #333} .tile{width: 32px}"
        );
    }

    #[test]
    fn test_minify_js() {
        let out = minify_js(JS);
        assert_eq!(
            out,
            "function start() { const size = 8; return size} start();"
        );
        assert!(!out.contains("//"));
        assert!(!out.contains("/*"));
    }

    #[test]
    fn test_minifiers_are_idempotent() {
        let html = minify_html(HTML);
        assert_eq!(minify_html(&html), html);

        let css = minify_css(CSS);
        assert_eq!(minify_css(&css), css);

        let js = minify_js(JS);
        assert_eq!(minify_js(&js), js);
    }

    #[test]
    fn test_unterminated_comments_are_kept() {
        assert_eq!(minify_html("<p>x</p> <!-- open"), "<p>x</p><!-- open");
        assert_eq!(minify_css("a { b: c } /* open"), "a{b: c } /* open");
    }

    #[test]
    fn test_js_line_comment_in_string_is_stripped() {
        // Known limitation of the textual transform
        assert_eq!(
            minify_js("const url = \"https://example.com\";"),
            "const url = \"https:"
        );
    }

    #[test]
    fn test_minify_by_kind() {
        assert_eq!(
            minify_by_kind(AssetKind::Css, "a { b: c; }").as_deref(),
            Some("a{b: c}")
        );
        assert_eq!(minify_by_kind(AssetKind::Other, "a  b"), None);
    }

    #[test]
    fn test_minify_by_kind_drops_bom() {
        assert_eq!(
            minify_by_kind(AssetKind::Css, "\u{feff}a { b: c; }").as_deref(),
            Some("a{b: c}")
        );
        assert_eq!(
            minify_by_kind(AssetKind::Js, "\u{feff}run(); // go").as_deref(),
            Some("run();")
        );
        assert_eq!(
            minify_by_kind(AssetKind::Html, "\u{feff}<p>\n</p>").as_deref(),
            Some("<p></p>")
        );
    }
}
