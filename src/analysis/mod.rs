//! Transcript analysis components.
//!
//! Everything in this module is a pure function over a transcript string:
//! no I/O, no shared state, safe to call concurrently from any number of
//! request handlers.

pub mod emotion;
pub mod sentiment;
pub mod stats;

pub use emotion::{EmotionDetection, MatchMode};
pub use sentiment::SentimentScore;
pub use stats::TextStatistics;
