//! Multi-field inverted index for BM25 full-text search.
//!
//! Three fixed searchable fields are maintained per document: the
//! marker-stripped description, the credit line, and the tokenized record
//! identifier (which makes UUID-like lookups work through the same scoring
//! path as prose). Each field keeps its own postings, document lengths,
//! and corpus statistics, so BM25 length normalization is computed
//! per-field.
//!
//! Lifecycle: construct empty, `add_document` for every record in corpus
//! order, then `finalize` once. After finalize the index is immutable and
//! reads may run in parallel; the lazily populated IDF cache is the only
//! interior mutability, and it memoizes a pure function of frozen
//! statistics.

use crate::analysis::normalize::normalize;
use crate::bm25::scorer;
use crate::bm25::tokenizer::{tokenize, CREDIT_NOISE_TERM};
use crate::record::IndexedDocument;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// The closed set of searchable fields.
///
/// Field identity is an enum rather than a string so dispatch is a match,
/// not a map lookup, and unknown fields cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Description text, cleaned of restriction markers.
    Desc,
    /// Credit / source line.
    Credit,
    /// The record identifier, tokenized.
    IdField,
}

impl SearchField {
    /// All fields, in scoring order.
    pub const ALL: [SearchField; 3] =
        [SearchField::Desc, SearchField::Credit, SearchField::IdField];
}

/// A single entry in a term's postings list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posting {
    /// 0-based index into the corpus array.
    pub doc_id: u32,
    /// Number of times the term appears in this field of this document.
    pub term_frequency: u32,
}

/// Per-field postings and corpus statistics.
#[derive(Debug, Default)]
pub struct FieldIndex {
    /// term → postings, one entry per distinct document containing the term.
    postings: HashMap<String, Vec<Posting>>,
    /// doc_id → token count of this field in that document. Every indexed
    /// document has an entry, zero when the field is empty.
    doc_lengths: Vec<u32>,
    /// Number of documents indexed into this field.
    total_docs: u32,
    /// Mean of `doc_lengths`; 0 when no documents. Computed at finalize.
    avg_doc_length: f32,
    /// All distinct terms in code-point-ascending order. Built at finalize.
    vocabulary: Vec<String>,
}

impl FieldIndex {
    /// Index one document's token stream.
    ///
    /// Counts per-term frequencies, appends one posting per distinct term,
    /// and records the (possibly zero) field length.
    fn index_tokens(&mut self, doc_id: u32, tokens: &[String]) {
        let idx = doc_id as usize;
        if idx >= self.doc_lengths.len() {
            self.doc_lengths.resize(idx + 1, 0);
        }
        self.doc_lengths[idx] = tokens.len() as u32;
        self.total_docs += 1;

        let mut tf_map: HashMap<&str, u32> = HashMap::new();
        for token in tokens {
            *tf_map.entry(token.as_str()).or_insert(0) += 1;
        }
        for (term, tf) in tf_map {
            self.postings.entry(term.to_string()).or_default().push(Posting {
                doc_id,
                term_frequency: tf,
            });
        }
    }

    /// Compute the average document length and build the sorted
    /// vocabulary. Idempotent when no documents were added in between.
    fn finalize(&mut self) {
        self.avg_doc_length = if self.total_docs == 0 {
            0.0
        } else {
            let total: u64 = self.doc_lengths.iter().map(|&l| l as u64).sum();
            total as f32 / self.total_docs as f32
        };
        let mut vocab: Vec<String> = self.postings.keys().cloned().collect();
        vocab.sort_unstable();
        self.vocabulary = vocab;
    }

    /// Postings for an already-folded term; empty slice when absent.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All indexed terms starting with `prefix`, up to `limit`.
    ///
    /// Binary-searches the sorted vocabulary for the lowest index with
    /// `vocab[i] >= prefix`, then collects while the prefix holds. Empty
    /// prefix, empty vocabulary, or `limit == 0` yield an empty slice.
    pub fn prefix_terms(&self, prefix: &str, limit: usize) -> &[String] {
        if prefix.is_empty() || self.vocabulary.is_empty() || limit == 0 {
            return &[];
        }
        let start = self.vocabulary.partition_point(|t| t.as_str() < prefix);
        let mut end = start;
        while end < self.vocabulary.len()
            && end - start < limit
            && self.vocabulary[end].starts_with(prefix)
        {
            end += 1;
        }
        &self.vocabulary[start..end]
    }

    /// Token count of this field in the given document.
    pub fn doc_length(&self, doc_id: u32) -> u32 {
        self.doc_lengths.get(doc_id as usize).copied().unwrap_or(0)
    }

    /// Number of documents indexed into this field.
    pub fn total_docs(&self) -> u32 {
        self.total_docs
    }

    /// Mean tokens-per-document; 0 for an empty field index.
    pub fn avg_doc_length(&self) -> f32 {
        self.avg_doc_length
    }

    /// The sorted term vocabulary (valid after finalize).
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

/// The corpus-wide inverted index: one [`FieldIndex`] per searchable
/// field, the document store, and the facet sets.
#[derive(Debug, Default)]
pub struct SearchIndex {
    documents: Vec<Arc<IndexedDocument>>,
    desc: FieldIndex,
    credit: FieldIndex,
    id: FieldIndex,
    credits: BTreeSet<String>,
    restrictions: BTreeSet<String>,
    idf_cache: RwLock<HashMap<SearchField, HashMap<String, f32>>>,
}

impl SearchIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a processed record. Ids are assigned contiguously from 0 in
    /// insertion order; the returned id is the record's slot in the
    /// corpus array.
    pub fn add_document(&mut self, doc: IndexedDocument) -> u32 {
        let doc_id = self.documents.len() as u32;

        let desc_tokens = tokenize(&doc.searchable_desc);
        let mut credit_tokens = tokenize(&doc.normalized_credit);
        credit_tokens.retain(|t| t != CREDIT_NOISE_TERM);
        let id_tokens = tokenize(&doc.record.id);

        self.desc.index_tokens(doc_id, &desc_tokens);
        self.credit.index_tokens(doc_id, &credit_tokens);
        self.id.index_tokens(doc_id, &id_tokens);

        self.credits.insert(doc.record.credit.clone());
        self.restrictions.extend(doc.markers.iter().cloned());
        self.documents.push(Arc::new(doc));
        doc_id
    }

    /// Freeze corpus statistics: per-field average lengths and sorted
    /// vocabularies. Must be called once after the last `add_document`;
    /// calling it again without intervening writes changes nothing.
    pub fn finalize(&mut self) {
        self.desc.finalize();
        self.credit.finalize();
        self.id.finalize();
        tracing::debug!(
            documents = self.documents.len(),
            desc_terms = self.desc.vocabulary.len(),
            credit_terms = self.credit.vocabulary.len(),
            id_terms = self.id.vocabulary.len(),
            "index finalized"
        );
    }

    /// Per-variant field dispatch.
    pub fn field(&self, field: SearchField) -> &FieldIndex {
        match field {
            SearchField::Desc => &self.desc,
            SearchField::Credit => &self.credit,
            SearchField::IdField => &self.id,
        }
    }

    /// Postings for a term in a field. The term is folded before lookup,
    /// so callers may pass raw user input.
    pub fn postings(&self, term: &str, field: SearchField) -> &[Posting] {
        let folded = normalize(term);
        self.field(field).postings(&folded)
    }

    /// Prefix lookup in a field's sorted vocabulary.
    pub fn prefix_terms(&self, prefix: &str, field: SearchField, limit: usize) -> &[String] {
        self.field(field).prefix_terms(prefix, limit)
    }

    /// Cached IDF for an already-folded term in a field.
    ///
    /// Pure function of frozen (document frequency, total documents), so
    /// racing readers compute identical values; the cache only ever
    /// publishes one.
    pub fn idf(&self, field: SearchField, term: &str) -> f32 {
        if let Some(&cached) = self.idf_cache.read().get(&field).and_then(|m| m.get(term)) {
            return cached;
        }
        let fi = self.field(field);
        let value = scorer::idf(fi.postings(term).len() as u32, fi.total_docs());
        self.idf_cache
            .write()
            .entry(field)
            .or_default()
            .insert(term.to_string(), value);
        value
    }

    /// The stored document at `doc_id`, if in range.
    pub fn document(&self, doc_id: u32) -> Option<&Arc<IndexedDocument>> {
        self.documents.get(doc_id as usize)
    }

    /// All stored documents in id order.
    pub fn documents(&self) -> &[Arc<IndexedDocument>] {
        &self.documents
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// `true` when no documents have been added.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All distinct raw credit lines, sorted.
    pub fn credits(&self) -> Vec<&str> {
        self.credits.iter().map(String::as_str).collect()
    }

    /// All distinct restriction markers, sorted.
    pub fn restrictions(&self) -> Vec<&str> {
        self.restrictions.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::preprocess::preprocess;
    use crate::record::MediaRecord;

    fn record(id: &str, desc: &str, credit: &str, date: &str) -> MediaRecord {
        MediaRecord {
            id: id.to_string(),
            desc: desc.to_string(),
            credit: credit.to_string(),
            date: date.to_string(),
            width: 4000,
            height: 3000,
        }
    }

    fn build(records: Vec<MediaRecord>) -> SearchIndex {
        let mut index = SearchIndex::new();
        for r in records {
            index.add_document(preprocess(r));
        }
        index.finalize();
        index
    }

    #[test]
    fn test_contiguous_ids_in_insertion_order() {
        let mut index = SearchIndex::new();
        let a = index.add_document(preprocess(record("a", "x", "c", "2024-01-01")));
        let b = index.add_document(preprocess(record("b", "y", "c", "2024-01-02")));
        assert_eq!((a, b), (0, 1));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_postings_count_equals_document_frequency() {
        let index = build(vec![
            record("a1", "Berlin Portrait", "IMAGO / Muller", "2024-01-01"),
            record("a2", "Berlin Skyline", "IMAGO / Schmidt", "2024-01-02"),
            record("a3", "Hamburg Hafen", "IMAGO / Muller", "2024-01-03"),
        ]);
        assert_eq!(index.postings("berlin", SearchField::Desc).len(), 2);
        assert_eq!(index.postings("hamburg", SearchField::Desc).len(), 1);
        assert!(index.postings("dresden", SearchField::Desc).is_empty());
    }

    #[test]
    fn test_term_frequency_counted_per_field() {
        let index = build(vec![record(
            "a1",
            "Berlin Berlin Berlin Portrait",
            "IMAGO",
            "2024-01-01",
        )]);
        let postings = index.postings("berlin", SearchField::Desc);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].term_frequency, 3);
    }

    #[test]
    fn test_lookup_folds_the_query_term() {
        let index = build(vec![record("a1", "München", "IMAGO", "2024-01-01")]);
        assert_eq!(index.postings("MÜNCHEN", SearchField::Desc).len(), 1);
        assert_eq!(index.postings("muenchen", SearchField::Desc).len(), 1);
    }

    #[test]
    fn test_every_document_has_a_length_entry() {
        // second record has an empty desc but still gets a length entry of 0
        let index = build(vec![
            record("a1", "Berlin Portrait", "IMAGO", "2024-01-01"),
            record("a2", "", "IMAGO", "2024-01-02"),
        ]);
        let fi = index.field(SearchField::Desc);
        assert_eq!(fi.total_docs(), 2);
        assert_eq!(fi.doc_length(0), 2);
        assert_eq!(fi.doc_length(1), 0);
    }

    #[test]
    fn test_avg_doc_length_is_the_mean() {
        let index = build(vec![
            record("a1", "Berlin Portrait Abend", "IMAGO", "2024-01-01"),
            record("a2", "Hamburg", "IMAGO", "2024-01-02"),
        ]);
        let fi = index.field(SearchField::Desc);
        assert!((fi.avg_doc_length() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_avg_doc_length_zero_when_empty() {
        let mut index = SearchIndex::new();
        index.finalize();
        assert_eq!(index.field(SearchField::Desc).avg_doc_length(), 0.0);
    }

    #[test]
    fn test_vocabulary_sorted_and_matches_postings_keys() {
        let index = build(vec![
            record("a1", "Zebra Adler Mitte", "IMAGO", "2024-01-01"),
            record("a2", "Adler Burg", "IMAGO", "2024-01-02"),
        ]);
        let fi = index.field(SearchField::Desc);
        let vocab = fi.vocabulary();
        assert_eq!(vocab, ["adler", "burg", "mitte", "zebra"]);
        for term in vocab {
            assert!(!fi.postings(term).is_empty());
        }
    }

    #[test]
    fn test_refinalize_is_idempotent() {
        let mut index = SearchIndex::new();
        index.add_document(preprocess(record("a1", "Berlin Portrait", "IMAGO", "2024-01-01")));
        index.finalize();
        let avg = index.field(SearchField::Desc).avg_doc_length();
        let vocab: Vec<String> = index.field(SearchField::Desc).vocabulary().to_vec();
        index.finalize();
        assert_eq!(index.field(SearchField::Desc).avg_doc_length(), avg);
        assert_eq!(index.field(SearchField::Desc).vocabulary(), vocab.as_slice());
    }

    #[test]
    fn test_prefix_terms_basic() {
        let index = build(vec![
            record("a1", "Berlin Bergsteiger Bern Hamburg", "IMAGO", "2024-01-01"),
        ]);
        let terms = index.prefix_terms("ber", SearchField::Desc, 50);
        assert_eq!(terms, ["bergsteiger", "berlin", "bern"]);
    }

    #[test]
    fn test_prefix_terms_respects_limit() {
        let index = build(vec![
            record("a1", "Berlin Bergsteiger Bern", "IMAGO", "2024-01-01"),
        ]);
        let terms = index.prefix_terms("ber", SearchField::Desc, 2);
        assert_eq!(terms, ["bergsteiger", "berlin"]);
    }

    #[test]
    fn test_prefix_terms_edge_cases() {
        let index = build(vec![record("a1", "Berlin", "IMAGO", "2024-01-01")]);
        assert!(index.prefix_terms("", SearchField::Desc, 50).is_empty());
        assert!(index.prefix_terms("ber", SearchField::Desc, 0).is_empty());
        assert!(index.prefix_terms("zzz", SearchField::Desc, 50).is_empty());
        let empty = SearchIndex::new();
        assert!(empty.prefix_terms("ber", SearchField::Desc, 50).is_empty());
    }

    #[test]
    fn test_credit_field_drops_agency_noise_term() {
        let index = build(vec![record("a1", "Berlin", "IMAGO / Muller", "2024-01-01")]);
        assert!(index.postings("imago", SearchField::Credit).is_empty());
        assert_eq!(index.postings("muller", SearchField::Credit).len(), 1);
        // but "imago" appearing in a description is indexed normally
        let index2 = build(vec![record("a1", "imago Archivbild", "X", "2024-01-01")]);
        assert_eq!(index2.postings("imago", SearchField::Desc).len(), 1);
    }

    #[test]
    fn test_id_field_supports_uuid_like_lookup() {
        let index = build(vec![record(
            "3f2a-88b1-c9d0",
            "Berlin",
            "IMAGO",
            "2024-01-01",
        )]);
        // hyphen dual emission indexes the whole id and its components
        assert_eq!(index.postings("3f2a-88b1-c9d0", SearchField::IdField).len(), 1);
        assert_eq!(index.postings("88b1", SearchField::IdField).len(), 1);
    }

    #[test]
    fn test_credit_and_restriction_sets_sorted() {
        let index = build(vec![
            record("a1", "Berlin NOxMODELxRELEASE", "Zeta Agentur", "2024-01-01"),
            record("a2", "Hamburg ABCxDEF", "Alpha Agentur", "2024-01-02"),
        ]);
        assert_eq!(index.credits(), ["Alpha Agentur", "Zeta Agentur"]);
        assert_eq!(index.restrictions(), ["ABCxDEF", "NOxMODELxRELEASE"]);
    }

    #[test]
    fn test_idf_cache_returns_consistent_values() {
        let index = build(vec![
            record("a1", "Berlin Portrait", "IMAGO", "2024-01-01"),
            record("a2", "Berlin Skyline", "IMAGO", "2024-01-02"),
            record("a3", "Hamburg", "IMAGO", "2024-01-03"),
        ]);
        let first = index.idf(SearchField::Desc, "berlin");
        let second = index.idf(SearchField::Desc, "berlin");
        assert_eq!(first, second);
        assert!(first > 0.0);
        // rarer term scores a higher IDF
        assert!(index.idf(SearchField::Desc, "hamburg") > first);
        // unknown term: IDF 0
        assert_eq!(index.idf(SearchField::Desc, "dresden"), 0.0);
    }
}
