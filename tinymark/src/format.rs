//! Format trait definition
//!
//! This module defines the Format trait that every render target implements.
//! The block scanner and the inline transformer never emit markup directly;
//! they ask the selected format for the tokens of each construct, so adding a
//! target means adding one implementation rather than another rule table.

use crate::error::FormatError;
use crate::formats::{AnsiFormat, HtmlFormat};
use crate::inline::MarkerKind;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Trait for render targets
///
/// # Examples
///
/// ```ignore
/// struct Plain;
///
/// impl Format for Plain {
///     fn name(&self) -> &str {
///         "plain"
///     }
///     fn paragraph_break(&self) -> &str {
///         "\n"
///     }
///     fn open_preformatted(&self) -> &str {
///         ""
///     }
///     fn close_preformatted(&self) -> &str {
///         ""
///     }
///     fn markup(&self, _kind: MarkerKind) -> (&str, &str) {
///         ("", "")
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "ansi")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a target from an output path.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Emitted for a blank line outside a preformatted block
    fn paragraph_break(&self) -> &str;

    /// Emitted for the fence that opens a preformatted block
    fn open_preformatted(&self) -> &str;

    /// Emitted for the fence that closes a preformatted block
    fn close_preformatted(&self) -> &str;

    /// Opening and closing tokens wrapped around the body of `kind`.
    ///
    /// Tokens must not contain whitespace or marker characters, or later rules
    /// would match differently than they did during validation.
    fn markup(&self, kind: MarkerKind) -> (&str, &str);

    /// Render one recognised construct
    fn render(&self, kind: MarkerKind, body: &str) -> String {
        let (open, close) = self.markup(kind);
        let mut out = String::with_capacity(open.len() + body.len() + close.len());
        out.push_str(open);
        out.push_str(body);
        out.push_str(close);
        out
    }

    /// Final assembly of the concatenated line output
    fn finish(&self, body: String) -> String {
        body
    }
}

/// The two built-in render targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    Html,
    #[default]
    Ansi,
}

impl RenderTarget {
    /// The format implementation backing this target
    pub fn format(self) -> &'static dyn Format {
        match self {
            RenderTarget::Html => &HtmlFormat,
            RenderTarget::Ansi => &AnsiFormat,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderTarget::Html => "html",
            RenderTarget::Ansi => "ansi",
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderTarget {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(RenderTarget::Html),
            "ansi" => Ok(RenderTarget::Ansi),
            other => Err(FormatError::FormatNotFound(other.to_string())),
        }
    }
}
