//! Keyword-based multi-label emotion detection.
//!
//! Scans a transcript for trigger words across four fixed categories (joy,
//! sadness, anger, fear) and reports a per-category boolean. The default
//! mode matches triggers as substrings of the lower-cased transcript, so a
//! trigger embedded in a longer word still fires ("unhappy" inside
//! "unhappiness"). A stricter whole-token mode is available via
//! [`MatchMode::Token`].

use serde::{Deserialize, Serialize};

const JOY_TRIGGERS: &[&str] = &["happy", "excited", "wonderful", "amazing", "great"];
const SADNESS_TRIGGERS: &[&str] = &["sad", "unhappy", "terrible", "awful", "down"];
const ANGER_TRIGGERS: &[&str] = &["angry", "furious", "mad", "upset", "irritated"];
const FEAR_TRIGGERS: &[&str] = &["scared", "afraid", "terrified", "worried", "anxious"];

/// How trigger words are matched against the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Trigger matches anywhere in the lower-cased transcript.
    Substring,
    /// Trigger must equal a whole alphanumeric token.
    Token,
}

impl Default for MatchMode {
    fn default() -> Self {
        Self::Substring
    }
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "token" => Ok(Self::Token),
            _ => Err(format!("Unknown match mode: {}", s)),
        }
    }
}

/// Per-category detection result. Every category is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionDetection {
    pub joy: bool,
    pub sadness: bool,
    pub anger: bool,
    pub fear: bool,
}

/// Detect emotion categories present in a transcript.
///
/// An empty transcript yields all categories false. Absent input must be
/// coerced to an empty string by the caller; this function does not
/// validate.
pub fn detect(transcript: &str, mode: MatchMode) -> EmotionDetection {
    let lowered = transcript.to_lowercase();

    EmotionDetection {
        joy: category_matches(&lowered, JOY_TRIGGERS, mode),
        sadness: category_matches(&lowered, SADNESS_TRIGGERS, mode),
        anger: category_matches(&lowered, ANGER_TRIGGERS, mode),
        fear: category_matches(&lowered, FEAR_TRIGGERS, mode),
    }
}

fn category_matches(lowered: &str, triggers: &[&str], mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => triggers.iter().any(|t| lowered.contains(t)),
        MatchMode::Token => lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .any(|token| triggers.contains(&token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_transcript_all_false() {
        let result = detect("", MatchMode::Substring);
        assert!(!result.joy);
        assert!(!result.sadness);
        assert!(!result.anger);
        assert!(!result.fear);
    }

    #[test]
    fn test_case_insensitive() {
        let upper = detect("HAPPY day", MatchMode::Substring);
        let lower = detect("happy day", MatchMode::Substring);
        assert_eq!(upper, lower);
        assert!(upper.joy);
        assert!(!upper.sadness);
        assert!(!upper.anger);
        assert!(!upper.fear);
    }

    #[test]
    fn test_substring_match_inside_longer_word() {
        // "unhappy" is a substring of "unhappiness"
        let result = detect("unhappiness", MatchMode::Substring);
        assert!(result.sadness);
    }

    #[test]
    fn test_substring_false_positive_mad_in_made() {
        let result = detect("I made dinner", MatchMode::Substring);
        assert!(result.anger);
    }

    #[test]
    fn test_token_mode_requires_whole_word() {
        let result = detect("I made dinner", MatchMode::Token);
        assert!(!result.anger);

        let result = detect("I am so mad right now", MatchMode::Token);
        assert!(result.anger);
    }

    #[test]
    fn test_token_mode_ignores_embedded_triggers() {
        assert!(!detect("unhappiness", MatchMode::Token).sadness);
        assert!(detect("unhappy", MatchMode::Token).sadness);
    }

    #[test]
    fn test_multiple_categories() {
        let result = detect("I was excited but also worried and upset", MatchMode::Substring);
        assert!(result.joy);
        assert!(result.anger);
        assert!(result.fear);
        assert!(!result.sadness);
    }

    #[test]
    fn test_serializes_exactly_four_categories() {
        let value = serde_json::to_value(detect("great", MatchMode::Substring)).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["joy", "sadness", "anger", "fear"] {
            assert!(obj[key].is_boolean(), "missing category: {}", key);
        }
        assert_eq!(value["joy"], true);
    }

    #[test]
    fn test_match_mode_parse() {
        assert_eq!("substring".parse::<MatchMode>().unwrap(), MatchMode::Substring);
        assert_eq!("TOKEN".parse::<MatchMode>().unwrap(), MatchMode::Token);
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }

    proptest! {
        #[test]
        fn prop_detection_is_idempotent(text in ".*") {
            let first = detect(&text, MatchMode::Substring);
            let second = detect(&text, MatchMode::Substring);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_token_mode_never_fires_more_than_substring(text in ".*") {
            let sub = detect(&text, MatchMode::Substring);
            let tok = detect(&text, MatchMode::Token);
            // Whole-token matching is strictly narrower
            prop_assert!(sub.joy || !tok.joy);
            prop_assert!(sub.sadness || !tok.sadness);
            prop_assert!(sub.anger || !tok.anger);
            prop_assert!(sub.fear || !tok.fear);
        }
    }
}
