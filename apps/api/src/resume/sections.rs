//! Section Segmenter: splits free-form resume text into named sections.
//!
//! Single forward pass over the non-blank lines. A line that is a recognised
//! heading moves the "current section" pointer; every other line is buffered
//! and flushed into the current section when the next heading (or the end of
//! the document) is reached.
//!
//! A heading that occurs twice overwrites the earlier body (last one wins).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Section names
// ────────────────────────────────────────────────────────────────────────────

/// The fixed set of resume sections. Declaration order is heading priority:
/// when a line matches more than one heading, the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Summary,
    Objective,
    Contact,
    Awards,
    Publications,
}

impl SectionName {
    pub const ALL: [SectionName; 10] = [
        SectionName::Experience,
        SectionName::Education,
        SectionName::Skills,
        SectionName::Projects,
        SectionName::Certifications,
        SectionName::Summary,
        SectionName::Objective,
        SectionName::Contact,
        SectionName::Awards,
        SectionName::Publications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
            SectionName::Projects => "projects",
            SectionName::Certifications => "certifications",
            SectionName::Summary => "summary",
            SectionName::Objective => "objective",
            SectionName::Contact => "contact",
            SectionName::Awards => "awards",
            SectionName::Publications => "publications",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section a document starts in before any heading is seen.
pub const DEFAULT_SECTION: SectionName = SectionName::Summary;

// ────────────────────────────────────────────────────────────────────────────
// Section map
// ────────────────────────────────────────────────────────────────────────────

/// Section name → section body. Every `SectionName` is always present,
/// possibly with an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionMap(BTreeMap<SectionName, String>);

impl SectionMap {
    /// A map with every section present and empty.
    pub fn empty() -> Self {
        Self(
            SectionName::ALL
                .iter()
                .map(|name| (*name, String::new()))
                .collect(),
        )
    }

    #[cfg(test)]
    pub fn get(&self, name: SectionName) -> &str {
        self.0.get(&name).map(String::as_str).unwrap_or_default()
    }

    /// Iterates sections in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionName, &str)> {
        self.0.iter().map(|(name, body)| (*name, body.as_str()))
    }

    /// Sections that ended up with a non-empty body.
    pub fn populated(&self) -> impl Iterator<Item = SectionName> + '_ {
        self.iter()
            .filter(|(_, body)| !body.is_empty())
            .map(|(name, _)| name)
    }

    fn set(&mut self, name: SectionName, body: String) {
        self.0.insert(name, body);
    }
}

impl Default for SectionMap {
    fn default() -> Self {
        Self::empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Heading matching
// ────────────────────────────────────────────────────────────────────────────

/// `(name, matcher)` pairs in priority order. A bare heading is the name
/// followed only by colons, dashes or whitespace ("Skills", "SKILLS:", "Skills --").
static HEADING_PATTERNS: LazyLock<Vec<(SectionName, Regex)>> = LazyLock::new(|| {
    SectionName::ALL
        .iter()
        .map(|name| {
            let pattern = format!(r"^{}[:\-\s]*$", regex::escape(name.as_str()));
            let re = Regex::new(&pattern).expect("heading pattern is a valid regex");
            (*name, re)
        })
        .collect()
});

/// Returns the section a line introduces, if it is a heading.
///
/// The line is compared lowercased. Besides bare headings, any line starting
/// with `name:` counts ("Skills: Rust, Go"). Text after the colon on such a
/// line is not kept in any section body.
pub fn match_heading(line: &str) -> Option<SectionName> {
    let lowered = line.trim().to_lowercase();
    HEADING_PATTERNS
        .iter()
        .find(|(name, re)| {
            re.is_match(&lowered) || lowered.starts_with(&format!("{}:", name.as_str()))
        })
        .map(|(name, _)| *name)
}

// ────────────────────────────────────────────────────────────────────────────
// Segmenter
// ────────────────────────────────────────────────────────────────────────────

/// Line boundaries recognised when splitting a document: `\n` plus the
/// vertical tab, form feed, file/group/record separators, NEL, and the
/// Unicode line and paragraph separators. `\r` is folded into `\n` first.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits resume text into a complete `SectionMap`. Never fails: empty input
/// yields a map of empty sections, and a document without headings lands
/// entirely in `summary`.
pub fn split_into_sections(text: &str) -> SectionMap {
    let normalized = text.replace('\r', "\n");

    let mut sections = SectionMap::empty();
    let mut current = DEFAULT_SECTION;
    let mut buffer: Vec<&str> = Vec::new();

    for line in normalized
        .split(is_line_break)
        .map(str::trim)
        .filter(|l| !l.is_empty())
    {
        match match_heading(line) {
            Some(heading) => {
                sections.set(current, flush(&buffer));
                buffer.clear();
                current = heading;
            }
            None => buffer.push(line),
        }
    }
    sections.set(current, flush(&buffer));

    sections
}

fn flush(buffer: &[&str]) -> String {
    buffer.join("\n").trim().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
