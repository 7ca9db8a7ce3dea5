//! Shared helpers for the integration tests

use tinymark::{transform, RenderTarget, Violation};

/// Convert to HTML, panicking on a violation
pub fn to_html(src: &str) -> String {
    transform(src, RenderTarget::Html).unwrap()
}

/// Convert to ANSI, panicking on a violation
pub fn to_ansi(src: &str) -> String {
    transform(src, RenderTarget::Ansi).unwrap()
}

/// The message a rejected document reports, checking both targets agree
pub fn violation_message(src: &str) -> String {
    let html = transform(src, RenderTarget::Html).unwrap_err();
    let ansi = transform(src, RenderTarget::Ansi).unwrap_err();
    assert_eq!(html, ansi);
    html.to_string()
}

pub fn violation(src: &str) -> Violation {
    transform(src, RenderTarget::Html).unwrap_err()
}
