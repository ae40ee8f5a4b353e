pub mod followup;
pub mod keywords;
pub mod pipeline;
pub mod prompts;
pub mod random;
pub mod scan;
pub mod sentiment;
pub mod signal;

pub mod test_support;

pub use followup::generate_follow_up_questions;
pub use keywords::{KeywordCounts, KeywordMatcher};
pub use pipeline::Analyzer;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use sentiment::extract_sentiment_data;
pub use signal::{extract_trading_opportunity, extract_trading_opportunity_with};
