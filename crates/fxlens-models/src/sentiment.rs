use serde::{Deserialize, Serialize};

/// Lowest and highest score a sentiment or signal strength can take.
pub const SCORE_MIN: u8 = 1;
pub const SCORE_MAX: u8 = 10;

/// Overall polarity of a piece of market commentary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarketImpact {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Badge bucket for a sentiment score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    /// Score 7 and above.
    High,
    /// Score 4 to 6.
    Medium,
    /// Score 3 and below.
    Low,
}

impl ImpactLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 7 => ImpactLevel::High,
            s if s >= 4 => ImpactLevel::Medium,
            _ => ImpactLevel::Low,
        }
    }
}

/// One labelled bar of the sentiment chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u8,
}

/// Sentiment extracted from an analysis text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentResult {
    /// Always two points: `Impact` (the score) and `Signal` (80% of it, at least 1).
    pub series: Vec<SeriesPoint>,
    pub impact: MarketImpact,
    /// 1 to 10.
    pub score: u8,
}

impl SentimentResult {
    /// Build a result from a score, clamping it into `[1, 10]` and deriving the series.
    pub fn new(score: u8, impact: MarketImpact) -> Self {
        let score = score.clamp(SCORE_MIN, SCORE_MAX);
        // floor(score * 0.8) in integer arithmetic
        let signal = (score * 4 / 5).max(SCORE_MIN);
        Self {
            series: vec![
                SeriesPoint {
                    label: "Impact".to_string(),
                    value: score,
                },
                SeriesPoint {
                    label: "Signal".to_string(),
                    value: signal,
                },
            ],
            impact,
            score,
        }
    }

    pub fn level(&self) -> ImpactLevel {
        ImpactLevel::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_tracks_score() {
        let result = SentimentResult::new(8, MarketImpact::Positive);
        assert_eq!(result.score, 8);
        assert_eq!(result.series[0].label, "Impact");
        assert_eq!(result.series[0].value, 8);
        assert_eq!(result.series[1].label, "Signal");
        assert_eq!(result.series[1].value, 6);
    }

    #[test]
    fn signal_point_never_drops_below_one() {
        let result = SentimentResult::new(1, MarketImpact::Neutral);
        assert_eq!(result.series[1].value, 1);
    }

    #[test]
    fn score_is_clamped() {
        assert_eq!(SentimentResult::new(0, MarketImpact::Neutral).score, 1);
        assert_eq!(SentimentResult::new(42, MarketImpact::Neutral).score, 10);
        assert_eq!(SentimentResult::new(42, MarketImpact::Neutral).series[1].value, 8);
    }

    #[test]
    fn impact_level_buckets() {
        assert_eq!(ImpactLevel::from_score(10), ImpactLevel::High);
        assert_eq!(ImpactLevel::from_score(7), ImpactLevel::High);
        assert_eq!(ImpactLevel::from_score(6), ImpactLevel::Medium);
        assert_eq!(ImpactLevel::from_score(4), ImpactLevel::Medium);
        assert_eq!(ImpactLevel::from_score(3), ImpactLevel::Low);
        assert_eq!(ImpactLevel::from_score(1), ImpactLevel::Low);
    }

    #[test]
    fn market_impact_serialization() {
        assert_eq!(
            serde_json::to_string(&MarketImpact::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&MarketImpact::Neutral).unwrap(),
            "\"neutral\""
        );
        assert_eq!(serde_json::to_string(&ImpactLevel::High).unwrap(), "\"high\"");
    }
}
