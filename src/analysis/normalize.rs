//! German orthography folding.
//!
//! Folds text to an ASCII-compatible form: lowercase, then `ä→ae`,
//! `ö→oe`, `ü→ue`, `ß→ss`. No other diacritics are touched. The same
//! folding is applied at index time and query time so both sides agree
//! on term identity.

/// Lowercase and fold German umlauts and ß.
///
/// Deterministic and total. Idempotent: the folded output contains no
/// character the fold would rewrite again.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        for lc in c.to_lowercase() {
            match lc {
                'ä' => out.push_str("ae"),
                'ö' => out.push_str("oe"),
                'ü' => out.push_str("ue"),
                'ß' => out.push_str("ss"),
                _ => out.push(lc),
            }
        }
    }
    out
}
