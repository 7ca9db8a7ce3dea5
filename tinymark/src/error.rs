//! Error types for markdown conversion

use std::fmt;

/// Inline construct named in a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Bold,
    Italic,
    Monospaced,
}

impl Construct {
    /// The word used for this construct in violation messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Construct::Bold => "bold",
            Construct::Italic => "italic",
            Construct::Monospaced => "monospaced",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Malformed markup found while transforming a document
///
/// The first violation aborts the whole document; no partial output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// One construct wraps another (e.g. `**bold and _italic_**`)
    Nested { outer: Construct, inner: Construct },
    /// A delimiter whose counterpart was never found
    Unclosed(Construct),
    /// Whitespace on both inner sides of a marker pair (e.g. `** bold **`)
    InvalidSpacing(Construct),
    /// A fence opened a preformatted block that never closes
    UnclosedPreformatted,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Nested { outer, inner } => {
                write!(f, "Invalid markdown: nested {outer} and {inner}")
            }
            Violation::Unclosed(construct) => write!(f, "Invalid markdown: unclosed {construct}"),
            Violation::InvalidSpacing(construct) => write!(
                f,
                "Invalid markdown: spaces are not allowed between {construct} markers and text"
            ),
            Violation::UnclosedPreformatted => {
                write!(f, "Invalid markdown: unclosed preformatted block")
            }
        }
    }
}

impl std::error::Error for Violation {}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// The source document was rejected
    InvalidMarkdown(Violation),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::InvalidMarkdown(violation) => write!(f, "{violation}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::InvalidMarkdown(violation) => Some(violation),
            FormatError::FormatNotFound(_) => None,
        }
    }
}

impl From<Violation> for FormatError {
    fn from(violation: Violation) -> Self {
        FormatError::InvalidMarkdown(violation)
    }
}
