//! Query scoring engine.
//!
//! Tokenizes the query with the indexing tokenizer, accumulates weighted
//! BM25 contributions per document across the three fields (exact matches
//! plus penalized prefix expansions), and returns hits in a total,
//! deterministic order: score descending, ties by ISO date descending,
//! remaining ties by document id ascending.

use crate::bm25::scorer;
use crate::bm25::tokenizer::tokenize;
use crate::bm25::{SearchField, SearchIndex};
use crate::search::types::{SearchConfig, SearchHit};
use ordered_float::OrderedFloat;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

#[derive(Default)]
struct DocScore {
    score: f32,
    matched: BTreeSet<String>,
}

/// Score a query against the index.
///
/// A query that tokenizes to nothing (empty, punctuation-only, or
/// stopword-only) enters browse mode: every document is returned with
/// score 0 in document-id order.
pub fn search(index: &SearchIndex, query: &str, config: &SearchConfig) -> Vec<SearchHit> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return browse_all(index);
    }
    score_tokens(index, &tokens, config)
}

/// Browse mode: the whole corpus, score 0, id order.
pub(crate) fn browse_all(index: &SearchIndex) -> Vec<SearchHit> {
    index
        .documents()
        .iter()
        .enumerate()
        .map(|(i, doc)| SearchHit {
            id: i as u32,
            document: Arc::clone(doc),
            score: 0.0,
            matched_terms: Vec::new(),
        })
        .collect()
}

/// Accumulate scores for an already-tokenized query.
pub(crate) fn score_tokens(
    index: &SearchIndex,
    tokens: &[String],
    config: &SearchConfig,
) -> Vec<SearchHit> {
    let mut scores: HashMap<u32, DocScore> = HashMap::new();

    for token in tokens {
        for field in SearchField::ALL {
            score_term(index, field, token, 1.0, config, &mut scores);

            if token.len() >= config.min_prefix_length {
                for expanded in index.prefix_terms(token, field, config.max_prefix_expansion) {
                    if expanded != token {
                        score_term(
                            index,
                            field,
                            expanded,
                            config.prefix_penalty,
                            config,
                            &mut scores,
                        );
                    }
                }
            }
        }
    }

    let mut hits: Vec<SearchHit> = scores
        .into_iter()
        .filter_map(|(doc_id, ds)| {
            index.document(doc_id).map(|doc| SearchHit {
                id: doc_id,
                document: Arc::clone(doc),
                score: ds.score,
                matched_terms: ds.matched.into_iter().collect(),
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        OrderedFloat(b.score)
            .cmp(&OrderedFloat(a.score))
            .then_with(|| b.document.iso_date.cmp(&a.document.iso_date))
            .then_with(|| a.id.cmp(&b.id))
    });
    tracing::debug!(tokens = tokens.len(), hits = hits.len(), "query scored");
    hits
}

/// Score one already-folded term in one field for every posting,
/// weighted by the field weight and an extra multiplier (1.0 for exact
/// matches, the prefix penalty for expansions).
fn score_term(
    index: &SearchIndex,
    field: SearchField,
    term: &str,
    multiplier: f32,
    config: &SearchConfig,
    scores: &mut HashMap<u32, DocScore>,
) {
    let fi = index.field(field);
    let postings = fi.postings(term);
    if postings.is_empty() {
        return;
    }
    let idf = index.idf(field, term);
    let weight = config.weight(field) * multiplier;

    for posting in postings {
        let contribution = scorer::term_score(
            posting.term_frequency,
            fi.doc_length(posting.doc_id),
            fi.avg_doc_length(),
            idf,
            config.k1,
            config.b,
        ) * weight;
        let entry = scores.entry(posting.doc_id).or_default();
        entry.score += contribution;
        entry.matched.insert(term.to_string());
    }
}
