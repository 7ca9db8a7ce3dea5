//! ANSI terminal format implementation
//!
//! Styles are applied with SGR escape sequences. Every inline construct is
//! closed with a full reset, so the output never leaves a style switched on:
//!
//! | Source            | On            | Off         |
//! |-------------------|---------------|-------------|
//! | `**x**`, `__x__`  | `ESC[1m`      | `ESC[0m`    |
//! | `_x_`             | `ESC[3m`      | `ESC[0m`    |
//! | `` `x` ``         | `ESC[7m`      | `ESC[0m`    |
//! | `# x`             | `ESC[1;4m`    | `ESC[0m`    |
//! | `## x`            | `ESC[1m`      | `ESC[0m`    |
//! | fence ... fence   | `ESC[7m`      | `ESC[27m`   |
//!
//! An inner reset would also switch off the enclosing style, so after a reset
//! inside a body the enclosing style is switched on again (`# **Big** title`
//! keeps ` title` bold and underlined).
//!
//! Paragraphs are separated by an empty line. There is no outer wrapper; newlines
//! at either end of the document are trimmed.

use crate::format::Format;
use crate::inline::MarkerKind;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const ITALIC: &str = "\x1b[3m";
pub const INVERSE: &str = "\x1b[7m";
pub const INVERSE_OFF: &str = "\x1b[27m";
pub const BOLD_UNDERLINE: &str = "\x1b[1;4m";

/// Format implementation for ANSI-escaped terminal text
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiFormat;

impl Format for AnsiFormat {
    fn name(&self) -> &str {
        "ansi"
    }

    fn description(&self) -> &str {
        "Terminal text with ANSI escape sequences"
    }

    fn file_extensions(&self) -> &[&str] {
        &["ans", "ansi"]
    }

    fn paragraph_break(&self) -> &str {
        "\n\n"
    }

    fn open_preformatted(&self) -> &str {
        INVERSE
    }

    fn close_preformatted(&self) -> &str {
        INVERSE_OFF
    }

    fn markup(&self, kind: MarkerKind) -> (&str, &str) {
        let on = match kind {
            MarkerKind::BoldStar | MarkerKind::BoldUnderscore | MarkerKind::Heading2 => BOLD,
            MarkerKind::Monospace => INVERSE,
            MarkerKind::Italic => ITALIC,
            MarkerKind::Heading1 => BOLD_UNDERLINE,
        };
        (on, RESET)
    }

    fn render(&self, kind: MarkerKind, body: &str) -> String {
        let (on, off) = self.markup(kind);
        let mut out = String::with_capacity(on.len() + body.len() + off.len());
        out.push_str(on);
        let mut rest = body;
        while let Some(at) = rest.find(RESET) {
            let (styled, after) = rest.split_at(at + RESET.len());
            out.push_str(styled);
            if !after.is_empty() {
                out.push_str(on);
            }
            rest = after;
        }
        out.push_str(rest);
        out.push_str(off);
        out
    }

    fn finish(&self, body: String) -> String {
        body.trim_matches('\n').to_string()
    }
}
