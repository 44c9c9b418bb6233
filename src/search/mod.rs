//! Query engine, post-scoring filters, and the search pipeline.
//!
//! [`engine::search`] scores a query; [`filter`] narrows and re-orders the
//! scored list; [`pipeline::execute`] composes the whole request/response
//! cycle including pagination.

/// Query scoring: exact and prefix-expanded BM25 accumulation.
pub mod engine;
/// Post-scoring filters and date ordering.
pub mod filter;
/// Request execution: score → filter → sort → paginate.
pub mod pipeline;
/// Configuration and result types.
pub mod types;

pub use engine::search;
pub use filter::{SearchFilter, SortOrder};
pub use pipeline::{execute, SearchRequest};
pub use types::{SearchConfig, SearchHit, SearchPage};
