//! Text statistics for a transcript.
//!
//! Word tokens come from splitting on runs of whitespace with `\s+`
//! semantics. That split yields one empty token for an empty transcript
//! (and leading/trailing empty tokens for all-whitespace input), so
//! `wordCount("")` is 1. This is published behavior of the analysis API
//! and is kept deliberately rather than inherited from
//! `str::split_whitespace`, which would report 0.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

fn word_splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid word split pattern"))
}

fn sentence_splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("valid sentence split pattern"))
}

/// Summary statistics computed fresh per request, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub average_word_length: f64,
    pub unique_words: usize,
}

/// Compute word/sentence counts and lexical diversity for a transcript.
pub fn summarize(transcript: &str) -> TextStatistics {
    let tokens: Vec<&str> = word_splitter().split(transcript).collect();

    // The split always yields at least one token, so the division below
    // cannot hit zero.
    let word_count = tokens.len();

    let sentence_count = sentence_splitter()
        .split(transcript)
        .filter(|fragment| !fragment.trim().is_empty())
        .count();

    let total_chars = transcript.chars().count();
    let average_word_length = round_two(total_chars as f64 / word_count as f64);

    let distinct: HashSet<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    TextStatistics {
        word_count,
        sentence_count,
        average_word_length,
        unique_words: distinct.len(),
    }
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
