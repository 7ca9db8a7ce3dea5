//! HTML format implementation
//!
//! # Element Mapping Table
//!
//! | Source            | HTML                  |
//! |-------------------|-----------------------|
//! | `**x**`, `__x__`  | `<b>x</b>`            |
//! | `_x_`             | `<i>x</i>`            |
//! | `` `x` ``         | `<tt>x</tt>`          |
//! | `# x`             | `<h1>x</h1>`          |
//! | `## x`            | `<h2>x</h2>`          |
//! | fence ... fence   | `<pre>...</pre>`      |
//! | blank line        | `</p><p>`             |
//!
//! The whole document is wrapped in a single `<p>...</p>` pair. Text is not
//! escaped: markup in the source passes through untouched.

use crate::format::Format;
use crate::inline::MarkerKind;

/// Format implementation for HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn paragraph_break(&self) -> &str {
        "</p><p>"
    }

    fn open_preformatted(&self) -> &str {
        "<pre>"
    }

    fn close_preformatted(&self) -> &str {
        "</pre>"
    }

    fn markup(&self, kind: MarkerKind) -> (&str, &str) {
        match kind {
            MarkerKind::BoldStar | MarkerKind::BoldUnderscore => ("<b>", "</b>"),
            MarkerKind::Monospace => ("<tt>", "</tt>"),
            MarkerKind::Italic => ("<i>", "</i>"),
            MarkerKind::Heading1 => ("<h1>", "</h1>"),
            MarkerKind::Heading2 => ("<h2>", "</h2>"),
        }
    }

    fn finish(&self, body: String) -> String {
        format!("<p>{body}</p>")
    }
}
