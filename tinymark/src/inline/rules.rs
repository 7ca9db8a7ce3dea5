//! Ordered marker rules
//!
//! Each rule pairs a matcher with the [`MarkerKind`] it produces. Rules are applied
//! one after another to the whole line, so a later rule sees the output of the
//! earlier ones: headings are recognised after inline markup has been rewritten.
//!
//! Patterns may name three groups:
//! - `body`: the text placed between the target's opening and closing tokens
//! - `lead`: text consumed before the opening delimiter and copied back unchanged
//! - `trail`: a boundary the match requires but does not consume, so the next
//!   match may start on it (`_a_ _b_` yields two spans)

use crate::error::Construct;
use crate::format::Format;
use once_cell::sync::Lazy;
use regex::Regex;

/// Inline or line-level construct recognised by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// `**x**`
    BoldStar,
    /// `__x__`, the whitespace-permissive bold
    BoldUnderscore,
    /// `` `x` ``
    Monospace,
    /// `_x_`
    Italic,
    /// `# x`
    Heading1,
    /// `## x`
    Heading2,
}

impl MarkerKind {
    /// Every kind, in rule order
    pub const ALL: [MarkerKind; 6] = [
        MarkerKind::BoldStar,
        MarkerKind::BoldUnderscore,
        MarkerKind::Monospace,
        MarkerKind::Italic,
        MarkerKind::Heading1,
        MarkerKind::Heading2,
    ];

    /// The construct this kind belongs to, if it takes part in validation
    pub fn construct(self) -> Option<Construct> {
        match self {
            MarkerKind::BoldStar | MarkerKind::BoldUnderscore => Some(Construct::Bold),
            MarkerKind::Monospace => Some(Construct::Monospaced),
            MarkerKind::Italic => Some(Construct::Italic),
            MarkerKind::Heading1 | MarkerKind::Heading2 => None,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            MarkerKind::BoldStar => r"\*\*(?P<body>\S(?:.*?\S)??)\*\*",
            MarkerKind::BoldUnderscore => r"__(?P<body>.*?)__",
            MarkerKind::Monospace => r"`(?P<body>\S(?:.*?\S)??)`",
            MarkerKind::Italic => r"(?P<lead>^|\s)_(?P<body>\S(?:.*?\S)??)_(?P<trail>\s|$)",
            MarkerKind::Heading1 => r"^# (?P<body>.*)",
            MarkerKind::Heading2 => r"^## (?P<body>.*)",
        }
    }
}

/// One occurrence of a rule in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'h> {
    /// Byte offset where the match (including `lead`) starts
    pub start: usize,
    /// Byte offset just past the consumed part of the match
    pub end: usize,
    pub lead: &'h str,
    pub body: &'h str,
}

/// A matcher paired with the kind it renders
#[derive(Debug)]
pub struct MarkerRule {
    pub kind: MarkerKind,
    pattern: Regex,
}

impl MarkerRule {
    fn new(kind: MarkerKind) -> Self {
        // Patterns are fixed literals covered by the tests below.
        let pattern = Regex::new(kind.pattern()).expect("marker patterns are valid");
        MarkerRule { kind, pattern }
    }

    /// All non-overlapping occurrences in `line`, left to right
    pub fn spans<'h>(&self, line: &'h str) -> Vec<Span<'h>> {
        let mut spans = Vec::new();
        let mut at = 0;
        while at < line.len() {
            let Some(caps) = self.pattern.captures_at(line, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let end = caps.name("trail").map_or(whole.end(), |m| m.start());
            spans.push(Span {
                start: whole.start(),
                end,
                lead: caps.name("lead").map_or("", |m| m.as_str()),
                body: caps.name("body").map_or("", |m| m.as_str()),
            });
            at = end;
        }
        spans
    }

    /// Whether the rule fires anywhere in `line`
    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Rewrite every occurrence with `format`'s markup.
    ///
    /// Returns `None` when the rule does not fire, leaving the line untouched.
    pub fn apply(&self, line: &str, format: &dyn Format) -> Option<String> {
        let spans = self.spans(line);
        if spans.is_empty() {
            return None;
        }
        log::trace!("{:?} matched {} time(s)", self.kind, spans.len());

        let mut out = String::with_capacity(line.len() + spans.len() * 16);
        let mut last = 0;
        for span in &spans {
            out.push_str(&line[last..span.start]);
            out.push_str(span.lead);
            out.push_str(&format.render(self.kind, span.body));
            last = span.end;
        }
        out.push_str(&line[last..]);
        Some(out)
    }
}

/// The rule table, in application order
pub static RULES: Lazy<Vec<MarkerRule>> =
    Lazy::new(|| MarkerKind::ALL.into_iter().map(MarkerRule::new).collect());

/// Rules belonging to `construct` (both bold variants for [`Construct::Bold`])
pub fn rules_for(construct: Construct) -> impl Iterator<Item = &'static MarkerRule> {
    RULES
        .iter()
        .filter(move |rule| rule.kind.construct() == Some(construct))
}
