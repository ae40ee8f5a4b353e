use std::cmp::Ordering;

use fxlens_models::{MarketImpact, SentimentResult, SCORE_MAX, SCORE_MIN};
use tracing::debug;

use crate::keywords::KeywordMatcher;
use crate::scan::{clamp_score, first_positive_number, split_lines};

/// Lines mentioning one of these may carry an explicit score.
pub const SCORE_TRIGGERS: &[&str] = &["impact", "force", "intensité"];

pub const POSITIVE_WORDS: &[&str] = &[
    "positif",
    "haussier",
    "bullish",
    "hausse",
    "augmentation",
    "renforcement",
    "amélioration",
    "croissance",
    "fort",
    "optimiste",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "négatif",
    "baissier",
    "bearish",
    "baisse",
    "diminution",
    "affaiblissement",
    "détérioration",
    "déclin",
    "faible",
    "pessimiste",
];

/// Added to the polarity spread when the text carries no explicit score.
const BASE_SCORE: usize = 3;

fn polarity_matcher() -> KeywordMatcher<MarketImpact> {
    KeywordMatcher::new(vec![
        (MarketImpact::Positive, POSITIVE_WORDS),
        (MarketImpact::Negative, NEGATIVE_WORDS),
    ])
}

/// Score the market impact and polarity of an analysis text.
///
/// Never fails: text without any explicit score gets `|positive - negative| + 3`,
/// clamped to `[1, 10]`.
pub fn extract_sentiment_data(text: &str) -> SentimentResult {
    let lowered = text.to_lowercase();
    let lines = split_lines(&lowered);

    let explicit = first_positive_number(&lines, SCORE_TRIGGERS);

    let counts = polarity_matcher().count(&lines);
    let positive = counts.get(MarketImpact::Positive);
    let negative = counts.get(MarketImpact::Negative);

    let impact = match positive.cmp(&negative) {
        Ordering::Greater => MarketImpact::Positive,
        Ordering::Less => MarketImpact::Negative,
        Ordering::Equal => MarketImpact::Neutral,
    };

    let score = if explicit > 0 {
        clamp_score(explicit, SCORE_MIN, SCORE_MAX)
    } else {
        let spread = positive.abs_diff(negative) + BASE_SCORE;
        clamp_score(u32::try_from(spread).unwrap_or(u32::MAX), SCORE_MIN, SCORE_MAX)
    };

    debug!(
        explicit,
        positive,
        negative,
        score,
        ?impact,
        "Sentiment extracted"
    );

    SentimentResult::new(score, impact)
}
