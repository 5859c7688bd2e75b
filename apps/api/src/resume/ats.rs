//! Relevance Scorer: keyword overlap between a resume and a job description.
//!
//! Algorithm:
//! 1. Empty / whitespace-only JD → score 0.0, no keywords.
//! 2. JD keywords = distinct lowercase tokens longer than 2 characters.
//! 3. Resume vocabulary = every distinct lowercase token (short ones included).
//! 4. score = |keywords ∩ vocabulary| / max(1, |keywords|) × 100
//!
//! A token is a maximal run of ASCII letters, digits, `_`, `+` or `#`, so
//! "C++", "C#" and "node_js" survive as single tokens.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Keywords must be strictly longer than this many characters.
const MIN_KEYWORD_LEN: usize = 2;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_+#]+").expect("token pattern is a valid regex"));

/// Result of scoring a resume against a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    /// Percentage of JD keywords present in the resume, 0.0 – 100.0.
    pub score: f64,
    /// JD keyword → 1 if the resume contains it, else 0.
    pub keywords: BTreeMap<String, u8>,
}

impl AtsScore {
    fn empty() -> Self {
        Self {
            score: 0.0,
            keywords: BTreeMap::new(),
        }
    }

    pub fn matched(&self) -> Vec<&str> {
        self.keywords_with(1)
    }

    pub fn missing(&self) -> Vec<&str> {
        self.keywords_with(0)
    }

    fn keywords_with(&self, presence: u8) -> Vec<&str> {
        self.keywords
            .iter()
            .filter(|(_, p)| **p == presence)
            .map(|(kw, _)| kw.as_str())
            .collect()
    }
}

/// Tokens of the lowercased `text`, in order, duplicates included.
///
/// Lowercasing happens before scanning, so a non-ASCII letter whose lowercase
/// form is ASCII (the Kelvin sign, for one) still contributes to a token.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct tokens longer than two characters.
pub fn keyword_set(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.len() > MIN_KEYWORD_LEN)
        .collect()
}

/// Scores `resume_text` against `jd_text`. Total: any input produces a result.
pub fn ats_score(resume_text: &str, jd_text: &str) -> AtsScore {
    if jd_text.trim().is_empty() {
        return AtsScore::empty();
    }

    let keywords = keyword_set(jd_text);
    let vocabulary: HashSet<String> = tokenize(resume_text).into_iter().collect();

    let presence: BTreeMap<String, u8> = keywords
        .into_iter()
        .map(|kw| {
            let present = u8::from(vocabulary.contains(&kw));
            (kw, present)
        })
        .collect();

    let matched = presence.values().filter(|p| **p == 1).count();
    let score = matched as f64 / presence.len().max(1) as f64 * 100.0;

    AtsScore {
        score,
        keywords: presence,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
