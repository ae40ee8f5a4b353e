use std::sync::LazyLock;

use fxlens_models::{Direction, TradingSignal, SCORE_MAX, SCORE_MIN};
use regex::Regex;
use tracing::debug;

use crate::keywords::KeywordMatcher;
use crate::random::{RandomSource, ThreadRandom};
use crate::scan::{clamp_score, first_positive_number, split_lines};

pub const MAJOR_PAIRS: &[&str] = &[
    "EUR/USD", "GBP/USD", "USD/JPY", "USD/CHF", "USD/CAD", "AUD/USD", "NZD/USD",
];

pub const CROSS_PAIRS: &[&str] = &[
    "EUR/GBP", "EUR/JPY", "GBP/JPY", "EUR/CHF", "EUR/AUD", "GBP/AUD", "EUR/CAD", "GBP/CAD",
];

/// Codes looked up individually when the text names no known pair. Order matters.
pub const CURRENCIES: &[&str] = &["EUR", "USD", "GBP", "JPY", "CHF", "CAD", "AUD", "NZD"];

pub const BUY_WORDS: &[&str] = &[
    "achat",
    "hausse",
    "bullish",
    "haussier",
    "augmentation",
    "renforcement",
    "appréciation",
    "support",
];

pub const SELL_WORDS: &[&str] = &[
    "vente",
    "baisse",
    "bearish",
    "baissier",
    "diminution",
    "affaiblissement",
    "dépréciation",
    "résistance",
];

pub const STRENGTH_TRIGGERS: &[&str] = &["force", "signal", "impact"];

/// Substrings that mark a line as a candidate reason.
const REASON_MARKERS: &[&str] = &["raison", "facteur", "car"];
/// Candidate reasons still containing these are list headers, not reasons.
const HEADER_WORDS: &[&str] = &["raison", "facteur"];

pub const MAX_REASONS: usize = 3;

pub const DEFAULT_REASONS: &[&str] = &[
    "Tendance technique confirmée",
    "Contexte macroéconomique favorable",
    "Momentum du marché",
];

/// Inclusive range for the strength drawn when the text states none.
pub const FALLBACK_STRENGTH: (u32, u32) = (5, 9);

// Lines are lower-cased before matching, so a lowercase class is enough.
static PAIR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]{3}/[a-z]{3}").unwrap());

fn direction_matcher() -> KeywordMatcher<Direction> {
    KeywordMatcher::new(vec![(Direction::Buy, BUY_WORDS), (Direction::Sell, SELL_WORDS)])
}

fn is_known_pair(pair: &str) -> bool {
    MAJOR_PAIRS.contains(&pair) || CROSS_PAIRS.contains(&pair)
}

/// Known pairs named in the text, in order of first mention.
fn find_named_pairs(lines: &[&str]) -> Vec<String> {
    let mut pairs: Vec<String> = Vec::new();
    for line in lines {
        for token in PAIR_TOKEN.find_iter(line) {
            let pair = token.as_str().to_uppercase();
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
    }
    pairs.retain(|p| is_known_pair(p));
    pairs
}

/// Pair made of the first two currency codes mentioned anywhere, in `CURRENCIES` order.
fn synthesize_pair(lines: &[&str]) -> Option<String> {
    let mentioned: Vec<&str> = CURRENCIES
        .iter()
        .copied()
        .filter(|code| {
            let needle = code.to_ascii_lowercase();
            lines.iter().any(|line| line.contains(&needle))
        })
        .take(2)
        .collect();

    match mentioned.as_slice() {
        [first, second] => Some(format!("{first}/{second}")),
        _ => None,
    }
}

fn detect_direction(lines: &[&str]) -> Direction {
    let counts = direction_matcher().count(lines);
    // Ties go to sell.
    if counts.get(Direction::Buy) > counts.get(Direction::Sell) {
        Direction::Buy
    } else {
        Direction::Sell
    }
}

/// Itemized lines (`-` / `•`) or lines mentioning a reason marker, minus headers.
fn extract_reasons(lines: &[&str]) -> Vec<String> {
    let reasons: Vec<String> = lines
        .iter()
        .copied()
        .filter(|line| {
            line.starts_with('-')
                || line.starts_with('•')
                || REASON_MARKERS.iter().any(|m| line.contains(m))
        })
        .map(|line| {
            line.strip_prefix(|c: char| c == '-' || c == '•')
                .unwrap_or(line)
                .trim()
        })
        .filter(|line| !line.is_empty() && !HEADER_WORDS.iter().any(|w| line.contains(w)))
        .take(MAX_REASONS)
        .map(str::to_string)
        .collect();

    if reasons.is_empty() {
        DEFAULT_REASONS.iter().map(|r| r.to_string()).collect()
    } else {
        reasons
    }
}

/// Identify a trade idea in an analysis text, using the thread-local generator
/// for the strength fallback.
pub fn extract_trading_opportunity(text: &str) -> Option<TradingSignal> {
    extract_trading_opportunity_with(text, &mut ThreadRandom)
}

/// Identify a trade idea in an analysis text.
///
/// Returns `None` only when no currency pair can be identified. When the text
/// states no strength, one is drawn from `random` in `[5, 9]`.
pub fn extract_trading_opportunity_with(
    text: &str,
    random: &mut dyn RandomSource,
) -> Option<TradingSignal> {
    let lowered = text.to_lowercase();
    let lines = split_lines(&lowered);

    let mut pairs = find_named_pairs(&lines);
    if pairs.is_empty() {
        pairs.extend(synthesize_pair(&lines));
    }

    let Some(pair) = pairs.into_iter().next() else {
        debug!("No currency pair identified");
        return None;
    };

    let direction = detect_direction(&lines);
    let reasons = extract_reasons(&lines);

    let mut strength = first_positive_number(&lines, STRENGTH_TRIGGERS);
    if strength == 0 {
        let (low, high) = FALLBACK_STRENGTH;
        strength = random.next_in_range(low, high);
        debug!(strength, "No explicit signal strength, drew fallback");
    }
    let strength = clamp_score(strength, SCORE_MIN, SCORE_MAX);

    debug!(
        pair = %pair,
        ?direction,
        strength,
        reasons = reasons.len(),
        "Trading signal extracted"
    );

    TradingSignal::new(&pair, direction, strength, reasons)
}
