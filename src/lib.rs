//! # bildsuche
//!
//! In-memory BM25 full-text search core for media-item records with
//! German-language metadata. Multi-field inverted index, Okapi BM25
//! relevance scoring with prefix expansion, and a query pipeline that
//! combines ranking with structured filtering and pagination.
//!
//! This is a pure library crate with zero async dependencies; the HTTP
//! surface, UI concerns, and analytics logging live in consumers. The
//! corpus is loaded once at startup; after [`SearchIndex::finalize`]
//! the index is immutable and queries may run in parallel.
//!
//! [`SearchIndex::finalize`]: bm25::SearchIndex::finalize

/// Text analysis: orthography folding, restriction marker extraction,
/// date canonicalization, and document preprocessing.
pub mod analysis;
/// BM25 full-text search: tokenizer, inverted index, and Okapi scoring.
pub mod bm25;
/// Global configuration constants: tuning parameters and defaults.
pub mod config;
/// Corpus loading and index construction.
pub mod corpus;
/// Core record types: raw `MediaRecord` and processed `IndexedDocument`.
pub mod record;
/// Query engine, post-scoring filters, and the search pipeline.
pub mod search;

pub use bm25::{SearchField, SearchIndex};
pub use record::{IndexedDocument, MediaRecord};
pub use search::{execute, SearchConfig, SearchHit, SearchPage, SearchRequest};
