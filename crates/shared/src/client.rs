use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

use crate::models::{SummarizeRequest, SummarizeResponse, Topic};

pub struct SummarizerClient {
    client: Client,
    base_url: Url,
}

impl SummarizerClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Request summaries for a topic. Single-shot: one POST, no retries.
    pub async fn summarize(&self, topic: &Topic) -> Result<SummarizeResponse> {
        let url = format!(
            "{}/summarize",
            self.base_url.as_str().trim_end_matches('/')
        );

        let request = SummarizeRequest {
            topic: topic.clone(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to summarizer backend")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!(
                "Summarizer backend returned error: {} - {}",
                status,
                error_text
            );
        }

        response
            .json::<SummarizeResponse>()
            .await
            .context("Failed to parse summarizer response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SummarizerClient {
        let base_url = Url::parse(&server.uri()).unwrap();
        SummarizerClient::new(base_url).unwrap()
    }

    #[tokio::test]
    async fn test_summarize_posts_topic_and_parses_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"topic": "rust"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "article_summaries": [
                    {"title": "A", "link": "https://a.example/1", "summary": "s1"}
                ],
                "consolidated_summary": "C"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let topic = Topic::parse("rust").unwrap();
        let response = client.summarize(&topic).await.unwrap();

        assert_eq!(response.article_summaries.len(), 1);
        assert_eq!(response.article_summaries[0].title, "A");
        assert_eq!(response.article_summaries[0].link, "https://a.example/1");
        assert_eq!(response.article_summaries[0].summary, "s1");
        assert_eq!(response.consolidated_summary, "C");
    }

    #[tokio::test]
    async fn test_summarize_reports_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let topic = Topic::parse("rust").unwrap();
        let error = client.summarize(&topic).await.unwrap_err();

        assert!(error.to_string().contains("500"), "got: {}", error);
    }

    #[tokio::test]
    async fn test_summarize_rejects_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let topic = Topic::parse("rust").unwrap();
        let error = client.summarize(&topic).await.unwrap_err();

        assert!(error.to_string().contains("parse"), "got: {}", error);
    }
}
