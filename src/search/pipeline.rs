//! The full search pipeline: score, filter, sort policy, paginate.
//!
//! Scoring always sees the whole corpus; filters and pagination only
//! shrink the result list afterwards. `total` in the returned page counts
//! the filtered list before windowing, which is what pagination widgets
//! need.

use crate::bm25::tokenizer::tokenize;
use crate::bm25::SearchIndex;
use crate::config;
use crate::search::engine;
use crate::search::filter::{sort_by_date, SearchFilter, SortOrder};
use crate::search::types::{SearchConfig, SearchHit, SearchPage};
use serde::Deserialize;

/// One search request: query, knobs, filters, sort, and page window.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Plain query string. No operators, quotes, or field qualifiers.
    pub query: String,
    /// Scoring knobs.
    pub config: SearchConfig,
    /// Structured filters applied after scoring.
    pub filter: SearchFilter,
    /// Explicit date ordering. When absent, an empty query defaults to
    /// newest-first and a scored query keeps BM25 order.
    pub sort: Option<SortOrder>,
    /// Pagination offset into the filtered list.
    pub offset: usize,
    /// Page size.
    pub limit: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            config: SearchConfig::default(),
            filter: SearchFilter::default(),
            sort: None,
            offset: 0,
            limit: config::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Execute a request against a finalized index.
pub fn execute(index: &SearchIndex, request: &SearchRequest) -> SearchPage {
    let tokens = tokenize(&request.query);
    let browse = tokens.is_empty();

    let mut hits = if browse {
        engine::browse_all(index)
    } else {
        engine::score_tokens(index, &tokens, &request.config)
    };

    hits.retain(|h| request.filter.matches(&h.document));

    match request.sort {
        Some(order) => sort_by_date(&mut hits, order),
        None if browse => sort_by_date(&mut hits, SortOrder::Desc),
        None => {}
    }

    let total = hits.len();
    let hits: Vec<SearchHit> = hits
        .into_iter()
        .skip(request.offset)
        .take(request.limit)
        .collect();
    tracing::debug!(total, returned = hits.len(), browse, "request executed");

    SearchPage {
        total,
        offset: request.offset,
        limit: request.limit,
        hits,
    }
}
