use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single item from the forex news feed.
///
/// Field names follow the feed JSON (`pubDate`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub pub_date: String,
    pub link: String,
    #[serde(default)]
    pub creator: String,
}

/// A news item together with the LLM commentary produced for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub news_item: NewsItem,
    /// Free-form analysis text, newline-delimited.
    pub analysis: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_feed_shaped_json() {
        let json = r#"{
            "newsItem": {
                "title": "BCE: statu quo sur les taux",
                "description": "La banque centrale maintient sa politique.",
                "pubDate": "Thu, 16 Jan 2025 13:45:00 GMT",
                "link": "https://example.com/bce",
                "creator": "Rédaction"
            },
            "analysis": "Impact: 6\nEUR/USD en hausse",
            "timestamp": "2025-01-16T14:00:00Z"
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.news_item.title, "BCE: statu quo sur les taux");
        assert_eq!(result.news_item.pub_date, "Thu, 16 Jan 2025 13:45:00 GMT");
        assert!(result.analysis.contains("EUR/USD"));
    }

    #[test]
    fn creator_is_optional() {
        let json = r#"{
            "title": "t",
            "description": "d",
            "pubDate": "p",
            "link": "l"
        }"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert!(item.creator.is_empty());
    }
}
