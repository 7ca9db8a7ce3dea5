//! Block scanner
//!
//! Walks the document line by line with a single piece of state: whether the
//! scanner is inside a preformatted block. That flag lives in one [`scan`] call
//! and nowhere else, so concurrent calls never observe each other.

use crate::error::Violation;
use crate::format::Format;
use crate::inline;
use log::{debug, trace};

/// Opens and closes a preformatted block when it starts a line
pub const FENCE: &str = "```";

/// Transform a whole document for `format`.
///
/// Stops at the first violation; no partial output is returned.
pub fn scan(document: &str, format: &dyn Format) -> Result<String, Violation> {
    let mut out = String::with_capacity(document.len() + document.len() / 4);
    let mut in_preformatted = false;

    for (index, raw) in document.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let number = index + 1;

        if line.trim().is_empty() {
            if in_preformatted {
                out.push('\n');
            } else {
                out.push_str(format.paragraph_break());
            }
            continue;
        }

        if line.starts_with(FENCE) {
            in_preformatted = !in_preformatted;
            if in_preformatted {
                trace!("line {number}: preformatted block opened");
                out.push_str(format.open_preformatted());
            } else {
                trace!("line {number}: preformatted block closed");
                out.push_str(format.close_preformatted());
            }
            continue;
        }

        if in_preformatted {
            out.push_str(line);
            out.push('\n');
            continue;
        }

        let rendered = inline::transform_line(line, format).inspect_err(|violation| {
            debug!("line {number}: {violation}");
        })?;
        out.push_str(&rendered);
    }

    if in_preformatted {
        debug!("end of input inside a preformatted block");
        return Err(Violation::UnclosedPreformatted);
    }

    Ok(format.finish(out))
}
