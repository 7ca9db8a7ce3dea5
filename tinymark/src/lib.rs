//! Constrained markdown to HTML or ANSI terminal text
//!
//!     This crate converts a deliberately small subset of markdown: bold (`**x**`, `__x__`),
//!     italic (`_x_`), monospace (`` `x` ``), two heading levels (`# `, `## `), fenced
//!     preformatted blocks and blank-line paragraph breaks. Nothing else is recognised, and
//!     malformed markup is rejected instead of being passed through.
//!
//!     This is a pure lib: it powers the tinymark cli but is shell agnostic. No code here reads
//!     files, prints, inspects env vars or exits the process. Diagnostics go through the `log`
//!     facade and it is up to the application to install a logger.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # Violation and FormatError
//!     ├── format.rs               # Format trait, RenderTarget
//!     ├── registry.rs             # FormatRegistry for lookup by name or file extension
//!     ├── scanner.rs              # Block scanner: lines, fences, paragraph breaks
//!     ├── inline
//!     │   ├── rules.rs            # Ordered marker rules
//!     │   ├── validate.rs         # Nesting, unclosed and spacing checks
//!     │   └── mod.rs              # Per-line pipeline
//!     ├── formats
//!     │   ├── html.rs
//!     │   └── ansi.rs
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The scanner splits on newlines and toggles its preformatted flag on every line that
//!     starts with a fence. Lines inside a block are copied verbatim. Every other non-blank
//!     line goes through the inline pipeline (see ./inline/mod.rs): nesting check, the rule
//!     table rendered with neutral sentinels, then the crossing, unclosed and spacing checks on
//!     that rendering. Only a line that passes is rendered for the real target, so validity
//!     never depends on the target. The first violation aborts the document.
//!
//!     Rules render through the [`Format`] trait, so the same table drives every target.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── common
//!     ├── html
//!     └── ansi
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.

pub mod error;
pub mod format;
pub mod formats;
pub mod inline;
pub mod registry;
pub mod scanner;

pub use error::{Construct, FormatError, Violation};
pub use format::{Format, RenderTarget};
pub use registry::FormatRegistry;

/// Converts a markdown document for `target`.
///
/// # Examples
///
/// ```
/// use tinymark::{transform, RenderTarget};
///
/// assert_eq!(
///     transform("**bold**", RenderTarget::Html).unwrap(),
///     "<p><b>bold</b></p>"
/// );
/// assert_eq!(
///     transform("**bold and _italic_**", RenderTarget::Html)
///         .unwrap_err()
///         .to_string(),
///     "Invalid markdown: nested bold and italic"
/// );
/// ```
pub fn transform(document: &str, target: RenderTarget) -> Result<String, Violation> {
    scanner::scan(document, target.format())
}

/// Converts a single line outside any preformatted block.
///
/// No paragraph wrapping or trimming is applied.
pub fn transform_line(line: &str, target: RenderTarget) -> Result<String, Violation> {
    inline::transform_line(line, target.format())
}
