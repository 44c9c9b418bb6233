//! BM25 Okapi scoring primitives.
//!
//! Two pure functions: the Lucene IDF variant and the per-(term, document)
//! contribution. They are kept free of index access so the query engine
//! can cache IDF per (field, term) and feed per-field statistics.

/// Inverse document frequency, Lucene variant.
///
/// `ln(1 + (N - n + 0.5) / (n + 0.5))` for document frequency `n` out of
/// `N` documents. Returns 0 when either count is 0. Always >= 0.
pub fn idf(doc_freq: u32, total_docs: u32) -> f32 {
    if total_docs == 0 || doc_freq == 0 {
        return 0.0;
    }
    let n = total_docs as f32;
    let df = doc_freq as f32;
    (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
}

/// BM25 contribution of one term in one field of one document.
///
/// `idf * tf*(k1+1) / (tf + k1*(1 - b + b*doc_len/avg_doc_len))`.
/// Returns 0 when `avg_doc_len` is 0 (empty field index) or `tf` is 0,
/// guarding the division.
pub fn term_score(tf: u32, doc_len: u32, avg_doc_len: f32, idf: f32, k1: f32, b: f32) -> f32 {
    if avg_doc_len == 0.0 || tf == 0 {
        return 0.0;
    }
    let tf = tf as f32;
    let len_norm = 1.0 - b + b * (doc_len as f32 / avg_doc_len);
    idf * (tf * (k1 + 1.0)) / (tf + k1 * len_norm)
}
