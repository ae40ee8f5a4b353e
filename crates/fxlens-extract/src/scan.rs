//! Line splitting and number scanning shared by the extractors.

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Split already lower-cased text into lines on `'\n'`.
///
/// Empty text yields a single empty line.
pub fn split_lines(lowered: &str) -> Vec<&str> {
    lowered.split('\n').collect()
}

/// Return the first strictly positive number found on a line that mentions one
/// of `triggers`, or 0 when none qualifies.
///
/// Only the first digit run of each qualifying line is considered. A run that
/// parses to 0 does not count, and scanning moves on to the next line.
/// Runs too large for `u32` saturate.
pub fn first_positive_number(lines: &[&str], triggers: &[&str]) -> u32 {
    for line in lines {
        if !triggers.iter().any(|t| line.contains(t)) {
            continue;
        }
        if let Some(run) = DIGIT_RUN.find(line) {
            let value = run.as_str().parse::<u32>().unwrap_or(u32::MAX);
            if value > 0 {
                return value;
            }
        }
    }
    0
}

/// Clamp a scanned number into a `[low, high]` byte range.
pub fn clamp_score(value: u32, low: u8, high: u8) -> u8 {
    value.clamp(u32::from(low), u32::from(high)) as u8
}
