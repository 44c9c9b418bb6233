//! Global configuration constants for bildsuche.
//!
//! All tuning parameters and search defaults are defined here. These are
//! compile-time defaults; every search-time knob can be overridden
//! per-query via [`SearchConfig`](crate::search::SearchConfig).

/// BM25 Okapi term frequency saturation parameter.
///
/// Controls how quickly term frequency saturates. Higher values allow TF
/// to grow more. Standard value is 1.2 (range: 1.0–2.0).
pub const BM25_K1: f32 = 1.2;

/// BM25 Okapi document length normalization parameter.
///
/// Controls the impact of document length on scoring. 0.0 = no
/// normalization, 1.0 = full normalization. Standard value is 0.75.
pub const BM25_B: f32 = 0.75;

/// Score multiplier for matches in the description field.
///
/// The description carries the editorial caption and is the strongest
/// relevance signal, so it dominates the other fields.
pub const DESC_WEIGHT: f32 = 3.0;

/// Score multiplier for matches in the credit field.
pub const CREDIT_WEIGHT: f32 = 1.5;

/// Score multiplier for matches in the record-identifier field.
pub const ID_WEIGHT: f32 = 1.0;

/// Minimum query term length (bytes) that triggers prefix expansion.
///
/// Shorter terms only match exactly. Expanding one- and two-character
/// prefixes would touch most of the vocabulary.
pub const MIN_PREFIX_LENGTH: usize = 3;

/// Maximum number of expanded terms per (query term, field).
///
/// 0 disables prefix expansion entirely.
pub const MAX_PREFIX_EXPANSION: usize = 50;

/// Score multiplier applied to prefix-expanded (non-exact) matches.
pub const PREFIX_PENALTY: f32 = 0.8;

/// Default number of hits per result page.
pub const DEFAULT_PAGE_SIZE: usize = 50;
