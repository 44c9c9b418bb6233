//! Corpus loading and index construction.
//!
//! The corpus is a JSON array of raw records, loaded once at startup.
//! Loading is the only fallible surface of the crate; every search
//! operation afterwards is total.

use crate::analysis::dates::parse_date;
use crate::analysis::preprocess::preprocess;
use crate::bm25::SearchIndex;
use crate::record::MediaRecord;
use std::fs;
use std::io;
use std::path::Path;

/// Read a JSON array of raw records from disk.
pub fn load_records(path: &Path) -> io::Result<Vec<MediaRecord>> {
    let bytes = fs::read(path)?;
    let records: Vec<MediaRecord> =
        serde_json::from_slice(&bytes).map_err(|e| io::Error::other(e.to_string()))?;
    tracing::info!(count = records.len(), path = %path.display(), "corpus loaded");
    Ok(records)
}

/// Preprocess and index a corpus, finalizing the index.
///
/// Records are indexed in iteration order; their corpus slots are their
/// positions in that order. Unparseable dates are counted and reported
/// once; the affected records keep their raw date string.
pub fn build_index(records: impl IntoIterator<Item = MediaRecord>) -> SearchIndex {
    let mut index = SearchIndex::new();
    let mut bad_dates = 0usize;
    for record in records {
        if parse_date(&record.date).is_none() {
            bad_dates += 1;
        }
        index.add_document(preprocess(record));
    }
    index.finalize();
    if bad_dates > 0 {
        tracing::warn!(
            count = bad_dates,
            "records with unparseable dates kept their raw date string"
        );
    }
    tracing::info!(documents = index.len(), "index built");
    index
}

/// Load a corpus file and build the finalized index in one step.
pub fn load_index(path: &Path) -> io::Result<SearchIndex> {
    Ok(build_index(load_records(path)?))
}
