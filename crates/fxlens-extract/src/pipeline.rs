use std::time::Instant;

use chrono::Utc;
use fxlens_models::{AnalysisReport, AnalysisResult, REPORT_SCHEMA_VERSION};
use tracing::info;
use uuid::Uuid;

use crate::followup::generate_follow_up_questions;
use crate::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::sentiment::extract_sentiment_data;
use crate::signal::extract_trading_opportunity_with;

/// Runs the sentiment extractor, the signal extractor and the follow-up
/// generator over one analysis and packages the results.
pub struct Analyzer {
    random: Box<dyn RandomSource>,
}

impl Analyzer {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Seeded analyzer when `seed` is set, thread-local entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(Box::new(SeededRandom::new(seed))),
            None => Self::new(Box::new(ThreadRandom)),
        }
    }

    pub fn analyze_text(&mut self, text: &str) -> AnalysisReport {
        self.analyze(text, None)
    }

    /// Analyze the commentary attached to a news item, keeping its title as headline.
    pub fn analyze_result(&mut self, result: &AnalysisResult) -> AnalysisReport {
        self.analyze(&result.analysis, Some(result.news_item.title.clone()))
    }

    fn analyze(&mut self, text: &str, headline: Option<String>) -> AnalysisReport {
        let start = Instant::now();

        let sentiment = extract_sentiment_data(text);
        let trading_signal = extract_trading_opportunity_with(text, self.random.as_mut());
        let follow_up_questions = generate_follow_up_questions(text);

        let elapsed = start.elapsed();
        match &trading_signal {
            Some(signal) => info!(
                pair = %signal.pair,
                direction = ?signal.direction,
                strength = signal.signal_strength,
                score = sentiment.score,
                impact = ?sentiment.impact,
                elapsed_us = elapsed.as_micros() as u64,
                "Analysis complete"
            ),
            None => info!(
                score = sentiment.score,
                impact = ?sentiment.impact,
                elapsed_us = elapsed.as_micros() as u64,
                "Analysis complete, no trading signal"
            ),
        }

        AnalysisReport {
            id: Uuid::new_v4(),
            schema_version: REPORT_SCHEMA_VERSION,
            analyzed_at: Utc::now(),
            headline,
            impact_level: sentiment.level(),
            sentiment,
            trading_signal,
            follow_up_questions,
            processing_time_ms: elapsed.as_millis() as u64,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::from_seed(None)
    }
}
