//! DOCX text extraction.
//!
//! A .docx file is a zip archive; the body lives in `word/document.xml`.
//! Output has one line per `<w:p>` paragraph (table-cell paragraphs
//! included), built from the paragraph's `<w:t>` runs. `<w:tab/>` becomes a
//! tab and `<w:br/>` / `<w:cr/>` a newline.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::UploadError;

const DOCUMENT_PART: &str = "word/document.xml";

/// A paragraph element: either self-closing (empty) or with a body.
static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*?)?(?:/>|>(.*?)</w:p>)").expect("paragraph pattern is a valid regex")
});

/// Text runs and the inline elements that render as whitespace.
static RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab\s*/>|<w:(?:br|cr)(?:\s[^>]*)?/>")
        .expect("run pattern is a valid regex")
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(lt|gt|amp|quot|apos|#[0-9]+|#x[0-9a-fA-F]+);").expect("entity pattern is a valid regex")
});

pub fn extract_text(data: &[u8]) -> Result<String, UploadError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| UploadError::Docx(format!("{DOCUMENT_PART} missing")))?
        .read_to_string(&mut xml)?;

    Ok(document_xml_to_text(&xml))
}

/// Flattens WordprocessingML body XML into newline-separated paragraphs.
pub fn document_xml_to_text(xml: &str) -> String {
    PARAGRAPH_RE
        .captures_iter(xml)
        .map(|para| para.get(1).map(|body| paragraph_text(body.as_str())).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(body: &str) -> String {
    let mut text = String::new();
    for run in RUN_RE.captures_iter(body) {
        match run.get(1) {
            Some(t) => text.push_str(&unescape_xml(t.as_str())),
            None if run[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }
    text
}

fn unescape_xml(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| match &caps[1] {
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "amp" => "&".to_string(),
            "quot" => "\"".to_string(),
            "apos" => "'".to_string(),
            numeric => decode_char_ref(numeric).unwrap_or_else(|| caps[0].to_string()),
        })
        .into_owned()
}

/// `#65` / `#x41` → "A". Invalid code points stay undecoded.
fn decode_char_ref(reference: &str) -> Option<String> {
    let digits = reference.strip_prefix('#')?;
    let code = match digits.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(String::from)
}
