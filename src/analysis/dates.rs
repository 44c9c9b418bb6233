//! Date string canonicalization.
//!
//! Corpus records carry dates in `DD.MM.YYYY`, `DD/MM/YYYY`, or already in
//! ISO `YYYY-MM-DD` form. Canonical ISO strings sort chronologically under
//! plain lexicographic comparison, which is what the date range filters
//! and the date sort rely on.
//!
//! No calendar validation is performed: `31.02.2024` is accepted and
//! emitted as `2024-02-31`.

use regex::Regex;
use std::sync::LazyLock;

static DOTTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$").expect("valid date pattern"));
static SLASHED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid date pattern"));
static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"));

/// Canonicalize a date string to `YYYY-MM-DD`.
///
/// Day and month are zero-padded to two digits. Returns `None` for
/// unrecognized input; the preprocessor falls back to the raw string in
/// that case so downstream comparisons stay deterministic.
pub fn parse_date(s: &str) -> Option<String> {
    if let Some(c) = DOTTED_RE.captures(s) {
        return Some(format!("{}-{:0>2}-{:0>2}", &c[3], &c[2], &c[1]));
    }
    if let Some(c) = SLASHED_RE.captures(s) {
        return Some(format!("{}-{:0>2}-{:0>2}", &c[3], &c[2], &c[1]));
    }
    if ISO_RE.is_match(s) {
        return Some(s.to_string());
    }
    None
}
