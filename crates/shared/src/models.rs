use serde::{Deserialize, Serialize};
use std::fmt;

/// User-entered subject to summarize. Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of the summarize request
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    pub topic: Topic,
}

/// One backend-produced record for a single source article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    pub link: String,
    pub summary: String,
}

impl ArticleSummary {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            summary: summary.into(),
        }
    }
}

/// Response from `POST /summarize`. Article order is significant and is
/// preserved through rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub article_summaries: Vec<ArticleSummary>,
    pub consolidated_summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Topic Tests ====================

    #[test]
    fn test_topic_parse_trims_whitespace() {
        let topic = Topic::parse("  rust async  ").unwrap();
        assert_eq!(topic.as_str(), "rust async");
    }

    #[test]
    fn test_topic_parse_rejects_empty() {
        assert!(Topic::parse("").is_none());
    }

    #[test]
    fn test_topic_parse_rejects_whitespace_only() {
        assert!(Topic::parse(" \t\n ").is_none());
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_request_serializes_topic_as_plain_string() {
        let request = SummarizeRequest {
            topic: Topic::parse("rust").unwrap(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"topic":"rust"}"#);
    }

    #[test]
    fn test_response_deserializes_articles_in_order() {
        let json = r#"{
            "article_summaries": [
                {"title": "A", "link": "https://a.example/1", "summary": "s1"},
                {"title": "B", "link": "https://b.example/2", "summary": "s2"}
            ],
            "consolidated_summary": "C"
        }"#;

        let response: SummarizeResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.article_summaries,
            vec![
                ArticleSummary::new("A", "https://a.example/1", "s1"),
                ArticleSummary::new("B", "https://b.example/2", "s2"),
            ]
        );
        assert_eq!(response.consolidated_summary, "C");
    }

    #[test]
    fn test_response_missing_article_summaries_is_error() {
        let result =
            serde_json::from_str::<SummarizeResponse>(r#"{"consolidated_summary": "C"}"#);
        assert!(result.is_err());
    }
}
