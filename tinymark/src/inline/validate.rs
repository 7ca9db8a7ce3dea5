//! Marker validation
//!
//! Four checks over a single line. They know nothing about render targets:
//! nesting runs on the raw source line, the others on the [`Skeleton`]
//! rendering of it, where every recognised construct is reduced to a pair of
//! sentinel characters and any delimiter still present is one no rule accepted.

use super::rules::{rules_for, MarkerKind};
use crate::error::{Construct, Violation};
use crate::format::Format;
use once_cell::sync::Lazy;
use regex::Regex;

/// Forbidden (outer, inner) pairs, in reporting order
const NESTING_ORDER: [(Construct, Construct); 6] = [
    (Construct::Bold, Construct::Italic),
    (Construct::Italic, Construct::Bold),
    (Construct::Bold, Construct::Monospaced),
    (Construct::Monospaced, Construct::Bold),
    (Construct::Italic, Construct::Monospaced),
    (Construct::Monospaced, Construct::Italic),
];

/// Delimiters checked for a missing counterpart, in reporting order
const DELIMITERS: [(&str, Construct); 3] = [
    ("_", Construct::Italic),
    ("**", Construct::Bold),
    ("`", Construct::Monospaced),
];

static SPACING: Lazy<Vec<(Regex, Construct)>> = Lazy::new(|| {
    [
        (r"\*\*\s.*\s\*\*", Construct::Bold),
        (r"(?:^|\s)_\s.*\s_(?:\s|$)", Construct::Italic),
        (r"`\s.*\s`", Construct::Monospaced),
    ]
    .into_iter()
    .map(|(pattern, construct)| {
        let regex = Regex::new(pattern).expect("spacing patterns are valid");
        (regex, construct)
    })
    .collect()
});

/// Neutral rendering used only for validation
///
/// Each kind opens and closes with its own code point from the end of plane 16
/// (private use). Sentinels are neither word characters nor whitespace, so the
/// boundary checks see them the way they see the brackets of an HTML tag.
/// Source text containing these code points is read as markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skeleton;

impl Skeleton {
    fn tokens(kind: MarkerKind) -> (&'static str, &'static str) {
        match kind {
            MarkerKind::BoldStar => ("\u{10FFF0}", "\u{10FFF1}"),
            MarkerKind::BoldUnderscore => ("\u{10FFF2}", "\u{10FFF3}"),
            MarkerKind::Monospace => ("\u{10FFF4}", "\u{10FFF5}"),
            MarkerKind::Italic => ("\u{10FFF6}", "\u{10FFF7}"),
            MarkerKind::Heading1 => ("\u{10FFF8}", "\u{10FFF9}"),
            MarkerKind::Heading2 => ("\u{10FFFA}", "\u{10FFFB}"),
        }
    }

    /// The kind a sentinel belongs to, and whether it opens
    fn decode(c: char) -> Option<(MarkerKind, bool)> {
        MarkerKind::ALL.into_iter().find_map(|kind| {
            let (open, close) = Self::tokens(kind);
            if open.starts_with(c) {
                Some((kind, true))
            } else if close.starts_with(c) {
                Some((kind, false))
            } else {
                None
            }
        })
    }
}

impl Format for Skeleton {
    fn name(&self) -> &str {
        "skeleton"
    }

    fn paragraph_break(&self) -> &str {
        ""
    }

    fn open_preformatted(&self) -> &str {
        ""
    }

    fn close_preformatted(&self) -> &str {
        ""
    }

    fn markup(&self, kind: MarkerKind) -> (&str, &str) {
        Self::tokens(kind)
    }
}

/// Reject a construct that wraps another one.
///
/// A pair is nested when a span recognised by the outer construct's rule has a
/// body in which the inner construct's rule fires.
pub fn check_nesting(line: &str) -> Result<(), Violation> {
    for (outer, inner) in NESTING_ORDER {
        let nested = rules_for(outer)
            .flat_map(|rule| rule.spans(line))
            .any(|span| rules_for(inner).any(|rule| rule.is_match(span.body)));
        if nested {
            return Err(Violation::Nested { outer, inner });
        }
    }
    Ok(())
}

/// Reject constructs whose spans cross, as in `**a _b** c_`.
///
/// `skeleton` is a line rendered with [`Skeleton`]. A construct closing while a
/// later one is still open crosses it; the earlier one is reported as outer.
/// The two bold variants never cross each other.
pub fn check_crossing(skeleton: &str) -> Result<(), Violation> {
    let mut open: Vec<MarkerKind> = Vec::new();
    for c in skeleton.chars() {
        let Some((kind, opens)) = Skeleton::decode(c) else {
            continue;
        };
        if opens {
            open.push(kind);
            continue;
        }
        let Some(at) = open.iter().rposition(|k| *k == kind) else {
            continue;
        };
        for later in &open[at + 1..] {
            if let (Some(outer), Some(inner)) = (kind.construct(), later.construct()) {
                if outer != inner {
                    return Err(Violation::Nested { outer, inner });
                }
            }
        }
        open.remove(at);
    }
    Ok(())
}

/// Reject a delimiter left behind by substitution.
///
/// A delimiter is dangling when it opens (no word character before it and
/// non-whitespace after it) or closes (non-whitespace before it and no word
/// character after it). Both sides are checked for every delimiter.
pub fn check_unclosed(line: &str) -> Result<(), Violation> {
    for (delimiter, construct) in DELIMITERS {
        if has_dangling(line, delimiter) {
            return Err(Violation::Unclosed(construct));
        }
    }
    Ok(())
}

/// Reject a marker pair whose enclosed text starts and ends with whitespace.
///
/// `__x__` is exempt.
pub fn check_spacing(line: &str) -> Result<(), Violation> {
    for (pattern, construct) in SPACING.iter() {
        if pattern.is_match(line) {
            return Err(Violation::InvalidSpacing(*construct));
        }
    }
    Ok(())
}

fn has_dangling(line: &str, delimiter: &str) -> bool {
    // Occurrences may overlap: `***` holds `**` at two offsets.
    line.char_indices()
        .filter(|(i, _)| line[*i..].starts_with(delimiter))
        .any(|(i, _)| {
            let before = line[..i].chars().next_back();
            let after = line[i + delimiter.len()..].chars().next();
            let opens =
                !before.is_some_and(is_word) && after.is_some_and(|c| !c.is_whitespace());
            let closes =
                before.is_some_and(|c| !c.is_whitespace()) && !after.is_some_and(is_word);
            opens || closes
        })
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
