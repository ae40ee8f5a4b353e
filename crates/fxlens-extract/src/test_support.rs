//! Deterministic random sources and sample analyses for tests.

use crate::random::RandomSource;

/// Always returns the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    pub value: u32,
}

impl FixedRandom {
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl RandomSource for FixedRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.value.clamp(low, high.max(low))
    }
}

/// Replays a sequence of values, cycling when exhausted. Records every range requested.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<u32>,
    next: usize,
    pub requested: Vec<(u32, u32)>,
}

impl SequenceRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            next: 0,
            requested: Vec::new(),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.requested.push((low, high));
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// A typical answer to the "trading" prompt.
pub const TRADING_ANALYSIS: &str = "Impact global sur le marché des changes : 7/10\n\
    Paires impactées : EUR/USD, GBP/USD\n\
    Paire principale : EUR/USD\n\
    - Direction : achat\n\
    - Force du signal : 8\n\
    - Raisons principales :\n\
    - Renforcement de l'euro après la BCE\n\
    - Affaiblissement du dollar sur les données d'emploi\n\
    - Support technique à 1.0850\n\
    - Momentum haussier sur les moyennes mobiles";

/// A bearish cross-pair answer with no explicit strength.
pub const BEARISH_CROSS_ANALYSIS: &str = "Paire croisée principale : GBP/JPY\n\
    Direction anticipée : vente\n\
    Le yen profite d'une aversion au risque, tendance baissière.\n\
    • Baisse des rendements britanniques\n\
    • Résistance majeure non franchie";

/// Commentary that mentions no currency at all.
pub const NEUTRAL_ANALYSIS: &str = "Analyse neutre sans paire ni chiffre.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_random_clamps_to_range() {
        assert_eq!(FixedRandom::new(7).next_in_range(5, 9), 7);
        assert_eq!(FixedRandom::new(42).next_in_range(5, 9), 9);
        assert_eq!(FixedRandom::new(0).next_in_range(5, 9), 5);
    }

    #[test]
    fn sequence_random_cycles_and_records() {
        let mut random = SequenceRandom::new(vec![5, 6]);
        assert_eq!(random.next_in_range(5, 9), 5);
        assert_eq!(random.next_in_range(5, 9), 6);
        assert_eq!(random.next_in_range(5, 9), 5);
        assert_eq!(random.requested, vec![(5, 9); 3]);
    }

    #[test]
    fn empty_sequence_returns_low() {
        assert_eq!(SequenceRandom::new(vec![]).next_in_range(5, 9), 5);
    }
}
