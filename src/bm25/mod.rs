//! BM25 full-text search engine.
//!
//! Multi-field inverted index with Okapi BM25 scoring. Documents are
//! tokenized with a German tokenizer (orthography folding, stopword
//! removal, hyphen dual emission); no stemming is applied.

/// Multi-field inverted index with per-field corpus statistics.
pub mod inverted_index;
/// Pure BM25 scoring functions.
pub mod scorer;
/// German tokenizer with stopword filtering.
pub mod tokenizer;

pub use inverted_index::{FieldIndex, Posting, SearchField, SearchIndex};
pub use tokenizer::tokenize;
