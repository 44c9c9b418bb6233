//! Search configuration and scored result types.

use crate::bm25::SearchField;
use crate::config;
use crate::record::IndexedDocument;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Per-query tuning knobs. Every field is overridable per request;
/// defaults come from [`config`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// BM25 term frequency saturation.
    pub k1: f32,
    /// BM25 length normalization.
    pub b: f32,
    /// Multiplier for description-field contributions.
    pub desc_weight: f32,
    /// Multiplier for credit-field contributions.
    pub credit_weight: f32,
    /// Multiplier for id-field contributions.
    pub id_weight: f32,
    /// Query terms shorter than this (bytes) do not trigger prefix expansion.
    pub min_prefix_length: usize,
    /// Cap on expanded terms per (query term, field). 0 disables expansion.
    pub max_prefix_expansion: usize,
    /// Multiplier applied to prefix-expanded (non-exact) matches.
    pub prefix_penalty: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k1: config::BM25_K1,
            b: config::BM25_B,
            desc_weight: config::DESC_WEIGHT,
            credit_weight: config::CREDIT_WEIGHT,
            id_weight: config::ID_WEIGHT,
            min_prefix_length: config::MIN_PREFIX_LENGTH,
            max_prefix_expansion: config::MAX_PREFIX_EXPANSION,
            prefix_penalty: config::PREFIX_PENALTY,
        }
    }
}

impl SearchConfig {
    /// The score multiplier for a field.
    pub fn weight(&self, field: SearchField) -> f32 {
        match field {
            SearchField::Desc => self.desc_weight,
            SearchField::Credit => self.credit_weight,
            SearchField::IdField => self.id_weight,
        }
    }
}

/// A document with its accumulated relevance score for one query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// 0-based corpus slot of the document.
    pub id: u32,
    /// The matched document (shared reference).
    pub document: Arc<IndexedDocument>,
    /// Accumulated BM25 score across fields; 0 in browse mode.
    pub score: f32,
    /// Indexed terms that contributed to the score, sorted. For prefix
    /// matches this is the expanded term, not the query prefix.
    pub matched_terms: Vec<String>,
}

/// One page of a result set.
#[derive(Debug, Serialize)]
pub struct SearchPage {
    /// Size of the filtered result set before pagination.
    pub total: usize,
    /// Offset this page starts at.
    pub offset: usize,
    /// Requested page size (the page may be shorter).
    pub limit: usize,
    /// The hits on this page.
    pub hits: Vec<SearchHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let c = SearchConfig::default();
        assert_eq!(c.k1, config::BM25_K1);
        assert_eq!(c.b, config::BM25_B);
        assert_eq!(c.desc_weight, 3.0);
        assert_eq!(c.credit_weight, 1.5);
        assert_eq!(c.id_weight, 1.0);
        assert_eq!(c.min_prefix_length, 3);
        assert_eq!(c.max_prefix_expansion, 50);
        assert_eq!(c.prefix_penalty, 0.8);
    }

    #[test]
    fn test_partial_override_from_json() {
        let c: SearchConfig = serde_json::from_str(r#"{"desc_weight": 5.0}"#).unwrap();
        assert_eq!(c.desc_weight, 5.0);
        assert_eq!(c.k1, config::BM25_K1);
    }
}
