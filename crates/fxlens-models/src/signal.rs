use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Buy,
    Sell,
}

/// A trade idea extracted from an analysis text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradingSignal {
    /// `BASE/QUOTE`, e.g. `EUR/USD`.
    pub pair: String,
    /// Base currency for a buy, quote currency for a sell.
    pub strong_currency: String,
    pub weak_currency: String,
    pub direction: Direction,
    /// 1 to 10.
    pub signal_strength: u8,
    /// Same value as `signal_strength`, kept for display.
    pub impact: u8,
    /// One to three itemized justifications.
    pub reasons: Vec<String>,
}

impl TradingSignal {
    /// Build a signal for `pair`, ordering the two currencies by `direction`.
    ///
    /// Returns `None` when `pair` is not of the form `BASE/QUOTE`.
    pub fn new(
        pair: &str,
        direction: Direction,
        signal_strength: u8,
        reasons: Vec<String>,
    ) -> Option<Self> {
        let (base, quote) = pair.split_once('/')?;
        let (strong, weak) = match direction {
            Direction::Buy => (base, quote),
            Direction::Sell => (quote, base),
        };
        Some(Self {
            pair: pair.to_string(),
            strong_currency: strong.to_string(),
            weak_currency: weak.to_string(),
            direction,
            signal_strength,
            impact: signal_strength,
            reasons,
        })
    }
}
