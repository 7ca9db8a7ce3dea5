//! Rejected documents and the messages they report

use crate::common::{to_html, violation, violation_message};
use insta::assert_snapshot;
use tinymark::{Construct, Violation};

// ============================================================================
// NESTING
// ============================================================================

#[test]
fn test_nested_bold_and_italic() {
    assert_snapshot!(
        violation_message("**bold and _italic_**"),
        @"Invalid markdown: nested bold and italic"
    );
}

#[test]
fn test_nested_italic_and_bold() {
    assert_snapshot!(
        violation_message("_italic and **bold**_"),
        @"Invalid markdown: nested italic and bold"
    );
}

#[test]
fn test_nested_bold_and_monospaced() {
    assert_snapshot!(
        violation_message("**bold and `monospaced`**"),
        @"Invalid markdown: nested bold and monospaced"
    );
}

#[test]
fn test_nested_monospaced_and_bold() {
    assert_snapshot!(
        violation_message("`monospaced and **bold**`"),
        @"Invalid markdown: nested monospaced and bold"
    );
}

#[test]
fn test_nested_italic_and_monospaced() {
    assert_snapshot!(
        violation_message("_italic and `monospaced`_"),
        @"Invalid markdown: nested italic and monospaced"
    );
}

#[test]
fn test_nested_monospaced_and_italic() {
    assert_snapshot!(
        violation_message("`monospaced and _italic_`"),
        @"Invalid markdown: nested monospaced and italic"
    );
}

#[test]
fn test_nested_inside_underscore_bold() {
    assert_snapshot!(
        violation_message("__bold and _italic_ here__"),
        @"Invalid markdown: nested bold and italic"
    );
}

#[test]
fn test_nesting_found_anywhere_in_document() {
    assert_eq!(
        violation("fine line\n\nanother **bold and _italic_** line"),
        Violation::Nested {
            outer: Construct::Bold,
            inner: Construct::Italic,
        }
    );
}

#[test]
fn test_crossing_bold_and_italic() {
    assert_snapshot!(
        violation_message("**a _b** c_"),
        @"Invalid markdown: nested bold and italic"
    );
}

#[test]
fn test_crossing_monospaced_and_bold() {
    assert_snapshot!(
        violation_message("`a **b` c**"),
        @"Invalid markdown: nested monospaced and bold"
    );
}

// ============================================================================
// UNCLOSED MARKERS
// ============================================================================

#[test]
fn test_unclosed_openers() {
    assert_snapshot!(violation_message("**bold text"), @"Invalid markdown: unclosed bold");
    assert_snapshot!(violation_message("_italic text"), @"Invalid markdown: unclosed italic");
    assert_snapshot!(
        violation_message("`monospaced text"),
        @"Invalid markdown: unclosed monospaced"
    );
}

#[test]
fn test_unclosed_closers() {
    assert_snapshot!(violation_message("bold text**"), @"Invalid markdown: unclosed bold");
    assert_snapshot!(violation_message("italic text_"), @"Invalid markdown: unclosed italic");
    assert_snapshot!(
        violation_message("text` still monospaced"),
        @"Invalid markdown: unclosed monospaced"
    );
}

#[test]
fn test_delimiter_after_rendered_marker_is_unclosed_for_every_target() {
    assert_snapshot!(violation_message("a**b**_c"), @"Invalid markdown: unclosed italic");
}

#[test]
fn test_unclosed_preformatted_block() {
    assert_snapshot!(
        violation_message("```\npre text"),
        @"Invalid markdown: unclosed preformatted block"
    );
}

#[test]
fn test_markers_inside_preformatted_block_are_not_validated() {
    assert_eq!(to_html("```\n**unclosed\n```"), "<p><pre>**unclosed\n</pre></p>");
}

// ============================================================================
// SPACING
// ============================================================================

#[test]
fn test_spacing_violations() {
    assert_snapshot!(
        violation_message("** bold text **"),
        @"Invalid markdown: spaces are not allowed between bold markers and text"
    );
    assert_snapshot!(
        violation_message("_ italic text _"),
        @"Invalid markdown: spaces are not allowed between italic markers and text"
    );
    assert_snapshot!(
        violation_message("` monospaced text `"),
        @"Invalid markdown: spaces are not allowed between monospaced markers and text"
    );
}

#[test]
fn test_underscore_bold_allows_inner_spaces() {
    assert_snapshot!(to_html("__ bold text __"), @"<p><b> bold text </b></p>");
}

// ============================================================================
// ABORT SEMANTICS
// ============================================================================

#[test]
fn test_first_violation_aborts_document() {
    assert_eq!(
        violation("ok\n**bad\n_also bad\nfine"),
        Violation::Unclosed(Construct::Bold)
    );
}

#[test]
fn test_nesting_reported_before_unclosed_on_same_line() {
    assert_eq!(
        violation("**bold and _italic_** and **dangling"),
        Violation::Nested {
            outer: Construct::Bold,
            inner: Construct::Italic,
        }
    );
}
