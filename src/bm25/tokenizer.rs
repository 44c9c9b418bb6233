//! German tokenizer with stopword removal.
//!
//! Produces the token stream used for both indexing and query processing.
//! The two sides must agree exactly on term identity, so this is the only
//! place orthography folding happens.
//!
//! Hyphenated compounds get dual emission: `baden-wuerttemberg` yields the
//! whole word plus `baden` and `wuerttemberg`, giving both exact-compound
//! and component-level recall. Document length reflects the inflated token
//! count; BM25 length normalization is computed against it consistently.

use crate::analysis::normalize::normalize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// German function words, lowercase, umlaut-folded.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // articles
        "der", "die", "das", "den", "dem", "des", "ein", "eine", "einer", "einem", "einen",
        "eines",
        // prepositions
        "in", "im", "an", "am", "auf", "aus", "bei", "mit", "nach", "von", "vor", "zu", "zum",
        "zur", "durch", "fuer", "gegen", "ohne", "um", "unter", "ueber",
        // conjunctions
        "und", "oder", "aber", "denn", "weil", "wenn", "als", "ob", "dass",
        // pronouns and auxiliaries
        "ist", "sind", "war", "waren", "wird", "werden", "hat", "haben", "hatte", "hatten",
        "kann", "koennen", "muss", "muessen", "soll", "sollen", "will", "wollen", "ich", "du",
        "er", "sie", "es", "wir", "ihr",
        // discourse particles
        "nicht", "auch", "nur", "noch", "schon", "sehr", "so", "wie", "was", "wer", "hier",
        "dort", "dann",
    ]
    .into_iter()
    .collect()
});

/// Domain term excluded from credit-field tokens only.
///
/// Nearly every record's credit line starts with the agency name; indexing
/// it would saturate the credit posting list and drown real signals.
pub const CREDIT_NOISE_TERM: &str = "imago";

/// Characters that separate words. Hyphens are deliberately absent; they
/// get their own treatment per word.
fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | '.' | ';' | ':' | '!' | '?' | '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}'
        )
}

fn push_token(tokens: &mut Vec<String>, token: &str) {
    if !STOP_WORDS.contains(token) {
        tokens.push(token.to_string());
    }
}

/// Tokenize text: fold, split on separators, handle hyphenated compounds,
/// drop stopwords and single-character tokens.
///
/// Numbers are retained. Callers pass un-normalized text; folding runs
/// here and only here, and `tokenize(normalize(x)) == tokenize(x)` holds.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut tokens = Vec::new();

    for word in normalized.split(is_separator).filter(|w| !w.is_empty()) {
        if word.contains('-') {
            let parts: Vec<&str> = word.split('-').filter(|p| p.len() >= 2).collect();
            if parts.len() >= 2 {
                if word.len() >= 2 {
                    push_token(&mut tokens, word);
                }
                for part in parts {
                    push_token(&mut tokens, part);
                }
            } else {
                let stripped: String = word.chars().filter(|&c| c != '-').collect();
                if stripped.len() >= 2 {
                    push_token(&mut tokens, &stripped);
                }
            }
        } else if word.len() >= 2 {
            push_token(&mut tokens, word);
        }
    }

    tokens
}
