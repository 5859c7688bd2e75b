//! Export: lays resume text out on fixed-size pages for download.
//!
//! Geometry follows a US-letter page: 792pt tall, 50pt margins, 12pt
//! leading, and a page break once the cursor would drop below
//! `margin + 20`. Lines are hard-wrapped at 90 characters.

pub mod handlers;

use serde::{Deserialize, Serialize};

const LETTER_HEIGHT_PT: u32 = 792;
const MARGIN_PT: u32 = 50;
const LEADING_PT: u32 = 12;
const BOTTOM_GUARD_PT: u32 = 20;
const DEFAULT_WRAP_WIDTH: usize = 90;

/// Separates pages in the plain-text rendering.
pub const PAGE_BREAK: char = '\x0c';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Maximum characters per line.
    pub wrap_width: usize,
    pub lines_per_page: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            lines_per_page: letter_lines_per_page(),
        }
    }
}

/// Lines that fit between the top margin and the bottom guard.
///
/// The cursor starts at `height - margin`, a line is drawn, then the cursor
/// drops by one leading; a new page starts once it is below `margin + guard`.
fn letter_lines_per_page() -> usize {
    let top = LETTER_HEIGHT_PT - MARGIN_PT;
    let floor = MARGIN_PT + BOTTOM_GUARD_PT;
    ((top - floor) / LEADING_PT + 1) as usize
}

/// Hard-wraps a line every `width` characters. An empty line stays one empty line.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Wraps `text` and splits the result into pages. Always returns at least one page.
pub fn paginate(text: &str, layout: &PageLayout) -> Vec<Vec<String>> {
    let lines: Vec<String> = text
        .split('\n')
        .flat_map(|line| wrap_line(line.trim_end_matches('\r'), layout.wrap_width))
        .collect();

    // `split` yields at least one (possibly empty) line, so there is always a page
    let per_page = layout.lines_per_page.max(1);
    lines.chunks(per_page).map(<[String]>::to_vec).collect()
}

/// Renders pages as text: `\n` between lines, a form feed between pages.
pub fn render_plain(pages: &[Vec<String>]) -> String {
    pages
        .iter()
        .map(|page| page.join("\n"))
        .collect::<Vec<_>>()
        .join(&format!("\n{PAGE_BREAK}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_page_holds_57_lines() {
        assert_eq!(PageLayout::default().lines_per_page, 57);
    }

    #[test]
    fn test_wrap_line_splits_on_chars_not_bytes() {
        let line = "é".repeat(95);
        let wrapped = wrap_line(&line, 90);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped[0].chars().count(), 90);
        assert_eq!(wrapped[1].chars().count(), 5);
    }

    #[test]
    fn test_wrap_exact_width_is_one_line() {
        assert_eq!(wrap_line(&"a".repeat(90), 90).len(), 1);
        assert_eq!(wrap_line("", 90), vec![String::new()]);
    }

    #[test]
    fn test_paginate_breaks_after_full_page() {
        let layout = PageLayout {
            wrap_width: 10,
            lines_per_page: 3,
        };
        let pages = paginate("a\nb\nc\nd", &layout);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], vec!["d".to_string()]);
    }

    #[test]
    fn test_paginate_keeps_blank_lines() {
        let pages = paginate("Experience\n\nAcme", &PageLayout::default());
        assert_eq!(pages, vec![vec!["Experience".to_string(), String::new(), "Acme".to_string()]]);
    }

    #[test]
    fn test_empty_text_is_one_empty_page() {
        let layout = PageLayout::default();
        let pages = paginate("", &layout);
        assert_eq!(pages, vec![vec![String::new()]]);
        assert_eq!(render_plain(&pages), "");
    }

    #[test]
    fn test_render_plain_separates_pages_with_form_feed() {
        let pages = vec![vec!["a".to_string()], vec!["b".to_string()]];
        assert_eq!(render_plain(&pages), "a\n\x0cb");
    }
}
