//! Export tests for the ANSI target

use crate::common::to_ansi;
use tinymark::formats::ansi::{BOLD, BOLD_UNDERLINE, INVERSE, INVERSE_OFF, ITALIC, RESET};

#[test]
fn test_inline_styles() {
    assert_eq!(to_ansi("**bold**"), format!("{BOLD}bold{RESET}"));
    assert_eq!(to_ansi("__bold__"), format!("{BOLD}bold{RESET}"));
    assert_eq!(to_ansi("_italic_"), format!("{ITALIC}italic{RESET}"));
    assert_eq!(to_ansi("`mono`"), format!("{INVERSE}mono{RESET}"));
}

#[test]
fn test_headings() {
    assert_eq!(
        to_ansi("# Title\n\n## Section"),
        format!("{BOLD_UNDERLINE}Title{RESET}\n\n{BOLD}Section{RESET}")
    );
}

#[test]
fn test_heading_style_resumes_after_inline_construct() {
    assert_eq!(
        to_ansi("# **Big** title"),
        format!("{BOLD_UNDERLINE}{BOLD}Big{RESET}{BOLD_UNDERLINE} title{RESET}")
    );
    assert_eq!(
        to_ansi("## `code`"),
        format!("{BOLD}{INVERSE}code{RESET}{RESET}")
    );
}

#[test]
fn test_paragraph_break_is_blank_line() {
    assert_eq!(to_ansi("one\n\ntwo"), "one\n\ntwo");
}

#[test]
fn test_preformatted_block_is_inverted() {
    assert_eq!(
        to_ansi("```\nlet x = 1;\n  indented\n```"),
        format!("{INVERSE}let x = 1;\n  indented\n{INVERSE_OFF}")
    );
}

#[test]
fn test_surrounding_blank_lines_are_trimmed() {
    assert_eq!(to_ansi("\n\ntext\n\n\n"), "text");
    assert_eq!(to_ansi("\ntext\n"), "text");
}

#[test]
fn test_interior_blank_lines_are_kept() {
    assert_eq!(to_ansi("a\n\n\nb"), "a\n\n\n\nb");
}

#[test]
fn test_trailing_preformatted_newline_is_trimmed_only_at_document_end() {
    // The block ends the document, so its closing token follows the last newline.
    assert_eq!(
        to_ansi("```\ncode\n```\n"),
        format!("{INVERSE}code\n{INVERSE_OFF}")
    );
}
