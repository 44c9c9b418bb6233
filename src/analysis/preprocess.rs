//! Document preprocessing: raw record → indexable record.
//!
//! Runs restriction extraction on the description (before any folding),
//! canonicalizes the date, and folds the credit line. The description
//! itself stays unfolded: the tokenizer folds it when the index consumes
//! it, so folding runs exactly once per text.

use crate::analysis::dates::parse_date;
use crate::analysis::normalize::normalize;
use crate::analysis::restrictions::extract;
use crate::record::{IndexedDocument, MediaRecord};

/// Transform a raw record into its indexable form.
///
/// Unparseable dates fall back to the raw date string; the range filters
/// then compare it lexicographically like any other value.
pub fn preprocess(record: MediaRecord) -> IndexedDocument {
    let extracted = extract(&record.desc);
    let iso_date = parse_date(&record.date).unwrap_or_else(|| record.date.clone());
    let normalized_credit = normalize(&record.credit);
    IndexedDocument {
        iso_date,
        searchable_desc: extracted.clean_text,
        markers: extracted.markers,
        normalized_credit,
        record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(desc: &str, credit: &str, date: &str) -> MediaRecord {
        MediaRecord {
            id: "img-0001".to_string(),
            desc: desc.to_string(),
            credit: credit.to_string(),
            date: date.to_string(),
            width: 4000,
            height: 3000,
        }
    }

    #[test]
    fn test_markers_separated_from_desc() {
        let doc = preprocess(record(
            "Muenchen PUBLICATIONxINxGERxONLY Marienplatz",
            "IMAGO / Muller",
            "2024-03-14",
        ));
        assert_eq!(doc.markers, vec!["PUBLICATIONxINxGERxONLY"]);
        assert_eq!(doc.searchable_desc, "Muenchen Marienplatz");
        assert_eq!(doc.record.desc, "Muenchen PUBLICATIONxINxGERxONLY Marienplatz");
    }

    #[test]
    fn test_desc_is_not_pre_normalized() {
        let doc = preprocess(record("Berlin Portrait", "IMAGO", "2024-03-14"));
        assert_eq!(doc.searchable_desc, "Berlin Portrait");
    }

    #[test]
    fn test_date_canonicalized() {
        let doc = preprocess(record("x", "y", "14.03.2024"));
        assert_eq!(doc.iso_date, "2024-03-14");
    }

    #[test]
    fn test_unparseable_date_falls_back_to_raw() {
        let doc = preprocess(record("x", "y", "Fruehjahr 2024"));
        assert_eq!(doc.iso_date, "Fruehjahr 2024");
    }

    #[test]
    fn test_credit_folded() {
        let doc = preprocess(record("x", "IMAGO / Müller", "2024-03-14"));
        assert_eq!(doc.normalized_credit, "imago / mueller");
        assert_eq!(doc.record.credit, "IMAGO / Müller");
    }
}
