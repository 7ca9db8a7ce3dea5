//! Inline transformation of a single line
//!
//! The order of the passes matters:
//!
//! 1. nesting check on the raw line
//! 2. every rule in [`rules::RULES`], in order, rendering with [`Skeleton`]
//! 3. crossing, unclosed and spacing checks on that skeleton
//! 4. the same rules again, rendering with the requested format
//!
//! Substitution consumes the well-formed pairs, so the unclosed and spacing
//! checks only see delimiters that no rule accepted. Checking the skeleton
//! rather than the final output keeps the verdict identical for every target.

pub mod rules;
pub mod validate;

pub use rules::{MarkerKind, MarkerRule, Span, RULES};
pub use validate::Skeleton;

use crate::error::Violation;
use crate::format::Format;

/// Validate and render one line outside a preformatted block
pub fn transform_line(line: &str, format: &dyn Format) -> Result<String, Violation> {
    validate::check_nesting(line)?;

    let skeleton = substitute(line, &Skeleton);
    validate::check_crossing(&skeleton)?;
    validate::check_unclosed(&skeleton)?;
    validate::check_spacing(&skeleton)?;

    Ok(substitute(line, format))
}

/// Apply every rule in order, rendering with `format`
pub(crate) fn substitute(line: &str, format: &dyn Format) -> String {
    let mut current = line.to_owned();
    for rule in RULES.iter() {
        if let Some(rewritten) = rule.apply(&current, format) {
            current = rewritten;
        }
    }
    current
}
