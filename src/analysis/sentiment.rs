//! Lexicon-based sentiment scoring.
//!
//! AFINN-style scorer: each known token carries an integer valence in
//! [-5, 5]; the transcript score is the sum over matched tokens and the
//! comparative score is that sum divided by the token count. The lexicon
//! here is a compact subset of AFINN-165 covering common conversational
//! vocabulary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

fn lexicon() -> &'static HashMap<&'static str, i32> {
    static LEXICON: OnceLock<HashMap<&'static str, i32>> = OnceLock::new();
    LEXICON.get_or_init(|| {
        HashMap::from([
            ("abandoned", -2),
            ("admire", 3),
            ("adore", 3),
            ("afraid", -2),
            ("amazing", 4),
            ("angry", -3),
            ("annoyed", -2),
            ("anxious", -2),
            ("appalled", -2),
            ("awesome", 4),
            ("awful", -3),
            ("bad", -3),
            ("beautiful", 3),
            ("best", 3),
            ("better", 2),
            ("bored", -2),
            ("brilliant", 4),
            ("broken", -1),
            ("calm", 2),
            ("charming", 3),
            ("cheerful", 2),
            ("comfortable", 2),
            ("confused", -2),
            ("cried", -2),
            ("cruel", -3),
            ("delighted", 3),
            ("depressed", -2),
            ("disappointed", -2),
            ("disaster", -2),
            ("disgusting", -3),
            ("dreadful", -3),
            ("eager", 2),
            ("ecstatic", 4),
            ("embarrassed", -2),
            ("enjoy", 2),
            ("enjoyed", 2),
            ("excellent", 3),
            ("excited", 3),
            ("exhausted", -2),
            ("fantastic", 4),
            ("fear", -2),
            ("fine", 2),
            ("frightened", -2),
            ("frustrated", -2),
            ("fun", 4),
            ("furious", -3),
            ("glad", 3),
            ("good", 3),
            ("great", 3),
            ("grief", -2),
            ("happy", 3),
            ("hate", -3),
            ("hated", -3),
            ("hope", 2),
            ("hopeful", 2),
            ("hopeless", -2),
            ("horrible", -3),
            ("hurt", -2),
            ("inspired", 2),
            ("irritated", -3),
            ("joy", 3),
            ("kind", 2),
            ("lonely", -2),
            ("lost", -3),
            ("love", 3),
            ("loved", 3),
            ("lovely", 3),
            ("lucky", 3),
            ("mad", -3),
            ("miserable", -3),
            ("miss", -2),
            ("nervous", -2),
            ("nice", 3),
            ("outstanding", 5),
            ("pain", -2),
            ("panic", -3),
            ("perfect", 3),
            ("pleased", 3),
            ("poor", -2),
            ("proud", 2),
            ("regret", -2),
            ("relaxed", 2),
            ("relieved", 2),
            ("sad", -2),
            ("scared", -2),
            ("sorry", -1),
            ("strong", 2),
            ("stressed", -2),
            ("stupid", -2),
            ("superb", 5),
            ("terrible", -3),
            ("terrific", 4),
            ("terrified", -3),
            ("thankful", 2),
            ("thrilled", 5),
            ("tired", -2),
            ("ugly", -3),
            ("unhappy", -2),
            ("upset", -2),
            ("useless", -2),
            ("want", 1),
            ("warm", 1),
            ("weak", -2),
            ("welcome", 2),
            ("win", 4),
            ("wonderful", 4),
            ("worried", -3),
            ("worse", -3),
            ("worst", -3),
            ("wrong", -2),
        ])
    })
}

/// Scoring result for a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Sum of matched token valences.
    pub score: i32,
    /// Score divided by the number of word tokens (0 for tokenless input).
    pub comparative: f64,
    /// Matched tokens with positive valence, in transcript order.
    pub positive: Vec<String>,
    /// Matched tokens with negative valence, in transcript order.
    pub negative: Vec<String>,
}

/// Score a transcript against the lexicon.
pub fn score(transcript: &str) -> SentimentScore {
    let lowered = transcript.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|t| !t.is_empty())
        .collect();

    let mut total = 0;
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for token in &tokens {
        if let Some(&valence) = lexicon().get(token) {
            total += valence;
            if valence > 0 {
                positive.push(token.to_string());
            } else {
                negative.push(token.to_string());
            }
        }
    }

    let comparative = if tokens.is_empty() {
        0.0
    } else {
        total as f64 / tokens.len() as f64
    };

    SentimentScore {
        score: total,
        comparative,
        positive,
        negative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_transcript() {
        let result = score("What a wonderful and amazing day");
        assert_eq!(result.score, 8);
        assert_eq!(result.positive, vec!["wonderful", "amazing"]);
        assert!(result.negative.is_empty());
        assert!(result.comparative > 0.0);
    }

    #[test]
    fn test_negative_transcript() {
        let result = score("This is terrible, just awful");
        assert_eq!(result.score, -6);
        assert_eq!(result.negative, vec!["terrible", "awful"]);
        assert!(result.positive.is_empty());
    }

    #[test]
    fn test_mixed_transcript_sums_valences() {
        // happy (+3) + sad (-2)
        let result = score("happy but sad");
        assert_eq!(result.score, 1);
        assert_eq!(result.positive, vec!["happy"]);
        assert_eq!(result.negative, vec!["sad"]);
    }

    #[test]
    fn test_empty_transcript() {
        let result = score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.comparative, 0.0);
        assert!(result.positive.is_empty());
        assert!(result.negative.is_empty());
    }

    #[test]
    fn test_comparative_normalizes_by_token_count() {
        // happy (+3) over 4 tokens
        let result = score("today I am happy");
        assert_eq!(result.score, 3);
        assert_eq!(result.comparative, 0.75);
    }

    #[test]
    fn test_case_insensitive_and_punctuation_stripped() {
        let result = score("HAPPY! Happy? happy.");
        assert_eq!(result.score, 9);
        assert_eq!(result.positive.len(), 3);
    }

    #[test]
    fn test_unknown_words_score_zero() {
        let result = score("the quick brown fox");
        assert_eq!(result.score, 0);
        assert_eq!(result.comparative, 0.0);
    }
}
