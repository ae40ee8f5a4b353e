//! fxlens - structured trading signals from forex market commentary
//!
//! Extracts a sentiment score, a trade idea (pair, direction, strength,
//! reasons) and follow-up questions from free-form analysis text.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use fxlens::extract::{extract_sentiment_data, extract_trading_opportunity, Analyzer};
//! use fxlens::models::{AnalysisReport, FxLensConfig};
//! ```

pub mod error;

pub use error::FxLensError;
pub use fxlens_extract as extract;
pub use fxlens_models as models;

use std::path::Path;

use fxlens_extract::Analyzer;
use fxlens_models::{AnalysisReport, AnalysisResult, FxLensConfig};
use tracing::debug;

/// Read and parse a TOML configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<FxLensConfig, FxLensError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Build an Analyzer from configuration, with an optional seed override.
pub fn build_analyzer(config: &FxLensConfig, seed_override: Option<u64>) -> Analyzer {
    Analyzer::from_seed(seed_override.or(config.extraction.seed))
}

/// Analyze raw input: plain analysis text, or an `AnalysisResult` JSON
/// document when `news_json` is set.
pub fn analyze_input(
    analyzer: &mut Analyzer,
    raw: &str,
    news_json: bool,
) -> Result<AnalysisReport, FxLensError> {
    debug!(bytes = raw.len(), news_json, "Analyzing input");
    if news_json {
        let result: AnalysisResult = serde_json::from_str(raw)?;
        Ok(analyzer.analyze_result(&result))
    } else {
        Ok(analyzer.analyze_text(raw))
    }
}

/// Serialize a value for stdout.
pub fn render_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, FxLensError> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxlens_models::ExtractionConfig;

    #[test]
    fn seed_override_wins() {
        let config = FxLensConfig {
            extraction: ExtractionConfig { seed: Some(1) },
            ..Default::default()
        };
        let a = analyze_input(&mut build_analyzer(&config, Some(2)), "EUR/USD", false).unwrap();
        let b = analyze_input(&mut build_analyzer(&config, Some(2)), "EUR/USD", false).unwrap();
        assert_eq!(a.trading_signal, b.trading_signal);
    }

    #[test]
    fn plain_text_input() {
        let mut analyzer = build_analyzer(&FxLensConfig::default(), Some(3));
        let report = analyze_input(&mut analyzer, "Impact: 9\nVente USD/CHF", false).unwrap();
        assert_eq!(report.sentiment.score, 9);
        assert_eq!(report.trading_signal.unwrap().pair, "USD/CHF");
        assert!(report.headline.is_none());
    }

    #[test]
    fn news_json_input() {
        let raw = r#"{
            "newsItem": {
                "title": "Le RBA maintient ses taux",
                "description": "Statu quo à Sydney",
                "pubDate": "Tue, 04 Feb 2025 03:30:00 GMT",
                "link": "https://example.com/rba"
            },
            "analysis": "AUD/USD en hausse\nForce 6",
            "timestamp": "2025-02-04T04:00:00Z"
        }"#;
        let mut analyzer = build_analyzer(&FxLensConfig::default(), Some(3));
        let report = analyze_input(&mut analyzer, raw, true).unwrap();
        assert_eq!(report.headline.as_deref(), Some("Le RBA maintient ses taux"));
        let signal = report.trading_signal.unwrap();
        assert_eq!(signal.pair, "AUD/USD");
        assert_eq!(signal.signal_strength, 6);
    }

    #[test]
    fn malformed_news_json_is_an_error() {
        let mut analyzer = build_analyzer(&FxLensConfig::default(), None);
        let err = analyze_input(&mut analyzer, "not json", true).unwrap_err();
        assert!(matches!(err, FxLensError::Json(_)));
    }

    #[test]
    fn render_compact_and_pretty() {
        let value = vec!["a", "b"];
        assert_eq!(render_json(&value, false).unwrap(), r#"["a","b"]"#);
        assert!(render_json(&value, true).unwrap().contains('\n'));
    }
}
