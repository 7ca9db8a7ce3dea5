//! Export tests for the HTML target
//!
//! Output is compared verbatim: every document is wrapped in a single `<p>`
//! and blank lines become `</p><p>`.

use crate::common::to_html;
use insta::assert_snapshot;
use tinymark::{transform_line, FormatRegistry, RenderTarget};

// ============================================================================
// SINGLE CONSTRUCTS
// ============================================================================

#[test]
fn test_bold_star() {
    assert_snapshot!(to_html("**bold**"), @"<p><b>bold</b></p>");
}

#[test]
fn test_bold_underscore() {
    assert_snapshot!(to_html("__bold__"), @"<p><b>bold</b></p>");
}

#[test]
fn test_italic() {
    assert_snapshot!(to_html("_italic_"), @"<p><i>italic</i></p>");
}

#[test]
fn test_monospace() {
    assert_snapshot!(to_html("`mono`"), @"<p><tt>mono</tt></p>");
}

#[test]
fn test_headings() {
    assert_snapshot!(to_html("# H1\n## H2"), @"<p><h1>H1</h1><h2>H2</h2></p>");
}

#[test]
fn test_hash_without_space_is_text() {
    assert_snapshot!(to_html("#hashtag"), @"<p>#hashtag</p>");
}

#[test]
fn test_preformatted_block() {
    assert_eq!(to_html("```\npre text\n```"), "<p><pre>pre text\n</pre></p>");
}

// ============================================================================
// COMBINATIONS
// ============================================================================

#[test]
fn test_mixed_inline_constructs() {
    assert_snapshot!(
        to_html("Use `cargo` to build **fast** and _safe_ code"),
        @"<p>Use <tt>cargo</tt> to build <b>fast</b> and <i>safe</i> code</p>"
    );
}

#[test]
fn test_heading_with_inline_markup() {
    assert_snapshot!(
        to_html("# The `tinymark` tool"),
        @"<p><h1>The <tt>tinymark</tt> tool</h1></p>"
    );
}

#[test]
fn test_bold_followed_by_punctuation() {
    assert_snapshot!(to_html("**bold**, then more"), @"<p><b>bold</b>, then more</p>");
}

#[test]
fn test_identifiers_with_underscores_are_text() {
    assert_snapshot!(to_html("call snake_case_fn now"), @"<p>call snake_case_fn now</p>");
}

#[test]
fn test_paragraphs() {
    assert_snapshot!(
        to_html("first paragraph\n\nsecond paragraph"),
        @"<p>first paragraph</p><p>second paragraph</p>"
    );
}

#[test]
fn test_consecutive_lines_join_without_separator() {
    assert_snapshot!(to_html("one\ntwo"), @"<p>onetwo</p>");
}

#[test]
fn test_markup_inside_preformatted_block_is_literal() {
    assert_eq!(
        to_html("intro\n```\n**x** _y\n\n`z\n```\noutro"),
        "<p>intro<pre>**x** _y\n\n`z\n</pre>outro</p>"
    );
}

#[test]
fn test_two_preformatted_blocks() {
    assert_eq!(
        to_html("```\na\n```\n\n```\nb\n```"),
        "<p><pre>a\n</pre></p><p><pre>b\n</pre></p>"
    );
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

#[test]
fn test_transform_line_skips_paragraph_wrapper() {
    assert_eq!(
        transform_line("**a** b", RenderTarget::Html),
        Ok("<b>a</b> b".to_string())
    );
}

#[test]
fn test_registry_matches_direct_transform() {
    let registry = FormatRegistry::default();
    let src = "# Title\n\n_one_ and **two**";
    assert_eq!(registry.transform(src, "html").unwrap(), to_html(src));
}
