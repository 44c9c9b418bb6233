//! Restriction marker extraction.
//!
//! Media descriptions embed usage-restriction markers as atomic uppercase
//! tokens of the form `WORDxWORD(xWORD)*`, e.g. `PUBLICATIONxINxGERxONLY`
//! or `NOxMODELxRELEASE`. They are structured metadata, not prose: this
//! module pulls them out before tokenization can corrupt them.
//!
//! Extraction must run before orthography folding: the pattern is defined
//! on uppercase ASCII and folding lowercases everything.

use regex::Regex;
use std::sync::LazyLock;

/// One or more uppercase ASCII letters followed by at least one
/// repetition of (literal `x` + one or more uppercase ASCII letters).
static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+(?:x[A-Z]+)+").expect("valid marker pattern"));

/// Result of scanning a description for restriction markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMarkers {
    /// All markers in left-to-right order, duplicates preserved.
    pub markers: Vec<String>,
    /// The input with each marker replaced by a space, whitespace runs
    /// collapsed, and ends trimmed.
    pub clean_text: String,
}

/// Separate embedded restriction markers from free text.
///
/// Empty input yields no markers and an empty clean text.
pub fn extract(text: &str) -> ExtractedMarkers {
    let markers = MARKER_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let replaced = MARKER_RE.replace_all(text, " ");
    let clean_text = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    ExtractedMarkers {
        markers,
        clean_text,
    }
}
