//! Heading extraction from category index documents.
//!
//! Only level-2 and level-3 ATX heading lines matter for navigation, so this
//! is a line scanner rather than a markdown parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::slug::encode;

/// `## text` or `### text`, with an optional trailing `{#anchor}` override.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{2,3}) +(.*?)(?:[ \t]*\{#([^}\s]+)\})?[ \t]*$").unwrap()
});

/// A level-2 or level-3 heading found in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (2 or 3).
    pub level: u8,
    /// Trimmed display text, possibly empty.
    pub text: String,
    /// Anchor given explicitly with `{#anchor}`.
    pub anchor_override: Option<String>,
    /// 1-based line number in the source document.
    pub line: usize,
}

impl Heading {
    /// Fragment identifier the rendered page assigns to this heading.
    ///
    /// An explicit override wins; otherwise the text is slug-encoded.
    #[must_use]
    pub fn anchor(&self) -> String {
        match &self.anchor_override {
            Some(anchor) => anchor.clone(),
            None => encode(&self.text),
        }
    }
}

/// Scans documents for navigation headings.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadingExtractor {
    overrides_only: bool,
}

impl HeadingExtractor {
    /// Create an extractor that returns every level-2 and level-3 heading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return headings that carry an explicit `{#anchor}` override.
    #[must_use]
    pub fn with_overrides_only(mut self) -> Self {
        self.overrides_only = true;
        self
    }

    /// Set override-only mode from a flag.
    #[must_use]
    pub fn overrides_only(mut self, enabled: bool) -> Self {
        self.overrides_only = enabled;
        self
    }

    /// Extract headings in document order.
    ///
    /// Both levels are flattened into a single sequence. Lines with four or
    /// more `#`, or without a space after the hashes, are ignored.
    #[must_use]
    pub fn extract(&self, document: &str) -> Vec<Heading> {
        document
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| parse_line(line, idx + 1))
            .filter(|heading| !self.overrides_only || heading.anchor_override.is_some())
            .collect()
    }
}

/// Extract every level-2 and level-3 heading from a document.
///
/// # Examples
///
/// ```
/// use navgen_core::extract;
///
/// let headings = extract("# Title\n## Setup {#setup}\n### Usage\n#### Details\n");
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[0].anchor(), "setup");
/// assert_eq!(headings[1].anchor(), "usage");
/// ```
#[must_use]
pub fn extract(document: &str) -> Vec<Heading> {
    HeadingExtractor::new().extract(document)
}

fn parse_line(line: &str, line_number: usize) -> Option<Heading> {
    let caps = HEADING_RE.captures(line)?;
    let level = u8::try_from(caps[1].len()).ok()?;

    Some(Heading {
        level,
        text: caps[2].trim().to_owned(),
        anchor_override: caps.get(3).map(|m| m.as_str().to_owned()),
        line: line_number,
    })
}
