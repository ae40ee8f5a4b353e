pub mod config;
pub mod news;
pub mod report;
pub mod sentiment;
pub mod signal;

pub use config::{ExtractionConfig, FxLensConfig, LogFormat, LoggingConfig, OutputConfig};
pub use news::{AnalysisResult, NewsItem};
pub use report::{AnalysisReport, REPORT_SCHEMA_VERSION};
pub use sentiment::{
    ImpactLevel, MarketImpact, SentimentResult, SeriesPoint, SCORE_MAX, SCORE_MIN,
};
pub use signal::{Direction, TradingSignal};
