/// Presence-based keyword counter over a fixed set of categories.
///
/// Each (line, token) pair contributes at most one count: a token repeated
/// within a line counts once, a token present on three lines counts three times.
#[derive(Debug, Clone)]
pub struct KeywordMatcher<C> {
    categories: Vec<(C, &'static [&'static str])>,
}

/// Per-category totals returned by [`KeywordMatcher::count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCounts<C> {
    counts: Vec<(C, usize)>,
}

impl<C: Copy + PartialEq> KeywordMatcher<C> {
    pub fn new(categories: Vec<(C, &'static [&'static str])>) -> Self {
        Self { categories }
    }

    /// Count token presence over lines that are already lower-cased.
    pub fn count(&self, lines: &[&str]) -> KeywordCounts<C> {
        let counts = self
            .categories
            .iter()
            .map(|(category, tokens)| {
                let total = lines
                    .iter()
                    .map(|line| tokens.iter().filter(|t| line.contains(*t)).count())
                    .sum();
                (*category, total)
            })
            .collect();
        KeywordCounts { counts }
    }
}

impl<C: Copy + PartialEq> KeywordCounts<C> {
    /// Total for `category`, 0 if the matcher did not define it.
    pub fn get(&self, category: C) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
