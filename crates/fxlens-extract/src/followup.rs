use std::sync::LazyLock;

use regex::Regex;

pub const MAX_FOLLOW_UPS: usize = 5;

pub const PAIR_QUESTIONS: [&str; 2] = [
    "Quels sont les niveaux techniques importants à surveiller ?",
    "Y a-t-il d'autres paires corrélées à surveiller ?",
];

pub const DIRECTION_QUESTIONS: [&str; 2] = [
    "Quels sont les risques principaux pour cette position ?",
    "Sur quel horizon de temps cette analyse est-elle valable ?",
];

pub const IMPACT_QUESTIONS: [&str; 2] = [
    "Y a-t-il des événements économiques à venir qui pourraient impacter cette analyse ?",
    "Comment le sentiment du marché pourrait-il évoluer ?",
];

pub const GENERAL_QUESTIONS: [&str; 2] = [
    "Pouvez-vous analyser une autre paire de devises ?",
    "Quel est le sentiment général du marché aujourd'hui ?",
];

// Case-sensitive on purpose: only upper-case pair tokens count.
static PAIR_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{3}/[A-Z]{3}").unwrap());

// "impact" followed by a digit later on the same line.
static IMPACT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)impact[^\r\n]*?[0-9]").unwrap());

/// Suggest up to five follow-up questions for an assistant answer.
///
/// Categories are appended in a fixed order (pair, direction, impact, general)
/// and the list is cut at five, so the general questions are the first to go.
pub fn generate_follow_up_questions(answer: &str) -> Vec<String> {
    let lowered = answer.to_lowercase();
    let has_pair = PAIR_MENTION.is_match(answer);
    let has_direction = lowered.contains("achat") || lowered.contains("vente");
    let has_impact = IMPACT_NUMBER.is_match(answer);

    let mut questions: Vec<&str> = Vec::with_capacity(8);
    if has_pair {
        questions.extend(PAIR_QUESTIONS);
    }
    if has_direction {
        questions.extend(DIRECTION_QUESTIONS);
    }
    if has_impact {
        questions.extend(IMPACT_QUESTIONS);
    }
    questions.extend(GENERAL_QUESTIONS);

    questions
        .into_iter()
        .take(MAX_FOLLOW_UPS)
        .map(str::to_string)
        .collect()
}
