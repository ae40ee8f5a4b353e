use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sentiment::{ImpactLevel, SentimentResult};
use crate::signal::TradingSignal;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Everything extracted from one analysis text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub schema_version: u32,
    pub analyzed_at: DateTime<Utc>,
    /// Title of the news item the analysis was written for, when known.
    pub headline: Option<String>,
    pub sentiment: SentimentResult,
    pub impact_level: ImpactLevel,
    /// Absent when no currency pair could be identified.
    pub trading_signal: Option<TradingSignal>,
    pub follow_up_questions: Vec<String>,
    pub processing_time_ms: u64,
}
