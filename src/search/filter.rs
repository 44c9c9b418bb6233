//! Post-scoring filters and the date sort.
//!
//! Filters run after scoring, never fused into it: an empty query still
//! browses the whole corpus, and a filter that excludes everything leaves
//! an empty list for pagination to report. Categories AND together;
//! within the restrictions category the selected values OR together.

use crate::record::IndexedDocument;
use crate::search::types::SearchHit;
use serde::Deserialize;

/// Sentinel restriction value selecting records with no markers at all.
///
/// This is an external API convention; it never appears in the index's
/// restriction set.
pub const NO_RESTRICTIONS_SENTINEL: &str = "none";

/// Structured filter applied to a scored result list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Keep only records whose raw credit equals this exactly.
    pub credit: Option<String>,
    /// Keep only records with a non-empty `iso_date >= date_from`.
    pub date_from: Option<String>,
    /// Keep only records with a non-empty `iso_date <= date_to`.
    pub date_to: Option<String>,
    /// Restriction selection, OR semantics. `"none"` selects marker-less
    /// records; other entries match by marker. An empty list is inactive.
    pub restrictions: Option<Vec<String>>,
}

impl SearchFilter {
    /// Check one document against all active filter categories.
    pub fn matches(&self, doc: &IndexedDocument) -> bool {
        if let Some(ref credit) = self.credit {
            if doc.record.credit != *credit {
                return false;
            }
        }
        if let Some(ref from) = self.date_from {
            if doc.iso_date.is_empty() || doc.iso_date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(ref to) = self.date_to {
            if doc.iso_date.is_empty() || doc.iso_date.as_str() > to.as_str() {
                return false;
            }
        }
        if let Some(ref selected) = self.restrictions {
            if !selected.is_empty() && !Self::matches_restrictions(selected, doc) {
                return false;
            }
        }
        true
    }

    fn matches_restrictions(selected: &[String], doc: &IndexedDocument) -> bool {
        let none_arm = selected.iter().any(|r| r == NO_RESTRICTIONS_SENTINEL)
            && doc.markers.is_empty();
        let marker_arm = doc.markers.iter().any(|m| {
            selected
                .iter()
                .any(|r| r != NO_RESTRICTIONS_SENTINEL && r == m)
        });
        none_arm || marker_arm
    }
}

/// Explicit date ordering requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

/// Drop hits whose documents fail the filter.
pub fn apply_filter(hits: Vec<SearchHit>, filter: &SearchFilter) -> Vec<SearchHit> {
    hits.into_iter()
        .filter(|h| filter.matches(&h.document))
        .collect()
}

/// Re-sort by `iso_date` lexicographically, replacing the BM25 order.
/// Equal dates keep document-id ascending order so runs are repeatable.
pub fn sort_by_date(hits: &mut [SearchHit], order: SortOrder) {
    hits.sort_by(|a, b| {
        let cmp = match order {
            SortOrder::Asc => a.document.iso_date.cmp(&b.document.iso_date),
            SortOrder::Desc => b.document.iso_date.cmp(&a.document.iso_date),
        };
        cmp.then_with(|| a.id.cmp(&b.id))
    });
}
