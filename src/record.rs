//! Core record types for bildsuche.
//!
//! A [`MediaRecord`] is a media item as received from the corpus: free-text
//! description, credit line, date string, and pixel dimensions. An
//! [`IndexedDocument`] is the processed form produced by
//! [`preprocess`](crate::analysis::preprocess), carrying the raw record
//! verbatim for display plus the derived fields the index consumes.

use serde::{Deserialize, Serialize};

/// A raw media-item record as received from the corpus.
///
/// The `desc` field may contain embedded restriction markers
/// (e.g. `PUBLICATIONxINxGERxONLY`); these are separated out during
/// preprocessing. The `date` field is one of `YYYY-MM-DD`, `DD.MM.YYYY`,
/// or `DD/MM/YYYY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Unique identifier string.
    pub id: String,
    /// Free-text description (German), possibly with embedded markers.
    pub desc: String,
    /// Credit / source line, e.g. `"IMAGO / Muller"`.
    pub credit: String,
    /// Date string in one of the three accepted formats.
    pub date: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// A processed record ready for indexing.
///
/// Preserves the raw [`MediaRecord`] for display and attaches the derived
/// fields. `searchable_desc` is the description with restriction markers
/// removed and whitespace collapsed. It is NOT pre-normalized, because
/// orthography folding runs exactly once inside the tokenizer.
#[derive(Debug, Clone, Serialize)]
pub struct IndexedDocument {
    /// The raw record, unchanged.
    pub record: MediaRecord,
    /// Canonical ISO date, or the raw date string when unparseable.
    pub iso_date: String,
    /// Description with restriction markers stripped.
    pub searchable_desc: String,
    /// Extracted restriction markers, document order, duplicates kept.
    pub markers: Vec<String>,
    /// Credit line after orthography folding; indexed as the credit field.
    pub normalized_credit: String,
}
