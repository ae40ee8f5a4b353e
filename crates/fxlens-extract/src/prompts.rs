use fxlens_models::NewsItem;
use serde::Serialize;

/// A canned instruction the user can pick to analyze a news item.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AnalysisPrompt {
    pub id: &'static str,
    pub name: &'static str,
    pub prompt: &'static str,
}

pub const PREDEFINED_PROMPTS: &[AnalysisPrompt] = &[
    AnalysisPrompt {
        id: "trading",
        name: "Analyse Trading",
        prompt: "Analysez cette actualité forex et fournissez uniquement:\n\
                 1. Impact global sur le marché des changes (note de 1 à 10)\n\
                 2. Paires de devises majeures impactées\n\
                 3. Pour la paire principale:\n   \
                 - Direction (achat/vente)\n   \
                 - Force du signal (1-10)\n   \
                 - 3 raisons principales justifiant la position\n\
                 Format concis, uniquement les points clés.",
    },
    AnalysisPrompt {
        id: "major",
        name: "Paires Majeures",
        prompt: "Analysez l'impact sur les paires majeures (EUR/USD, GBP/USD, USD/JPY):\n\
                 1. Force de l'impact (1-10)\n\
                 2. Paire la plus impactée\n\
                 3. Direction probable\n\
                 4. 3 facteurs clés influençant le mouvement\n\
                 Format court et précis.",
    },
    AnalysisPrompt {
        id: "cross",
        name: "Paires Croisées",
        prompt: "Analysez l'impact sur les crosses (EUR/GBP, EUR/JPY, GBP/JPY):\n\
                 1. Impact sur les crosses (1-10)\n\
                 2. Paire croisée principale affectée\n\
                 3. Direction anticipée\n\
                 4. 3 éléments justifiant l'analyse\n\
                 Réponse directe et factuelle.",
    },
    AnalysisPrompt {
        id: "quick",
        name: "Analyse Rapide",
        prompt: "Analyse rapide du forex:\n\
                 1. Impact marché (1-10)\n\
                 2. Paire principale touchée\n\
                 3. Direction et force du mouvement\n\
                 Format ultra-concis.",
    },
];

/// System prompt for the conversational assistant. Asks for exactly the
/// structure the extractors look for.
pub const CHAT_SYSTEM_PROMPT: &str = "Tu es un expert en trading forex. Analyse ces actualités \
     et réponds à la question de l'utilisateur.\n\
     Fournis une réponse structurée avec:\n\
     - Impact sur le marché (note /10)\n\
     - Paires de devises concernées\n\
     - Direction recommandée (achat/vente)\n\
     - 2-3 raisons principales\n\
     Sois précis et concis.";

/// Suggestions offered before the first message of a conversation.
pub const STARTER_QUESTIONS: [&str; 5] = [
    "Quelles sont les principales opportunités de trading aujourd'hui ?",
    "Y a-t-il des événements majeurs qui impactent l'EUR/USD ?",
    "Quel est le sentiment général sur le marché forex ?",
    "Quelles paires de devises montrent le plus de volatilité ?",
    "Y a-t-il des tendances importantes à surveiller ?",
];

/// How many news items go into the chat context.
pub const CONTEXT_NEWS_LIMIT: usize = 3;

pub fn get_prompt(id: &str) -> Option<&'static AnalysisPrompt> {
    PREDEFINED_PROMPTS.iter().find(|p| p.id == id)
}

/// Assemble the user message sent to the assistant: the latest news followed
/// by the user's question.
pub fn build_chat_context(news: &[NewsItem], question: &str) -> String {
    let latest = news
        .iter()
        .take(CONTEXT_NEWS_LIMIT)
        .map(|item| format!("{}\n{}\n", item.title, item.description))
        .collect::<Vec<_>>()
        .join("\n---\n");

    format!(
        "Voici les dernières actualités forex:\n\n{latest}\n\nQuestion de l'utilisateur: {question}"
    )
}
