//! Format implementations
//!
//! One module per render target. Each implements [`crate::format::Format`].

pub mod ansi;
pub mod html;

pub use ansi::AnsiFormat;
pub use html::HtmlFormat;

/// Names of the built-in formats, sorted
pub const AVAILABLE_FORMATS: &[&str] = &["ansi", "html"];
