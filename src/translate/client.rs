use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface::{TranslateError, TranslateInterface};
use crate::config::TranslatorConfig;

/// Client for the provider's `translate v2` REST API.
///
/// Stateless: one outbound request per call, no retries, no explicit
/// timeout (reqwest defaults apply).
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct TranslateRequestBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponseBody {
    data: TranslationData,
}

#[derive(Debug, Deserialize)]
struct TranslationData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl GoogleTranslateClient {
    /// Create a new client. Endpoint and credential come from configuration,
    /// never from a hard-coded literal.
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Extract the first translation entry from the provider's JSON payload.
    fn parse_response(body: &str) -> Result<String, TranslateError> {
        let response: TranslateResponseBody =
            serde_json::from_str(body).map_err(|e| TranslateError::Parse(e.to_string()))?;

        response
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| TranslateError::Parse("no translations in response".to_string()))
    }
}

#[async_trait]
impl TranslateInterface for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let body = TranslateRequestBody {
            q: text,
            source: source_lang,
            target: target_lang,
            format: "text",
        };

        debug!(
            "Sending translate request: source={}, target={}, chars={}",
            source_lang,
            target_lang,
            text.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Transport { status, body });
        }

        let payload = response.text().await?;
        Self::parse_response(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_shape() {
        let body = TranslateRequestBody {
            q: "Good morning",
            source: "en",
            target: "de",
            format: "text",
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "q": "Good morning",
                "source": "en",
                "target": "de",
                "format": "text"
            })
        );
    }

    #[test]
    fn parse_takes_first_translation() {
        let body = r#"{
            "data": {
                "translations": [
                    { "translatedText": "Guten Morgen" },
                    { "translatedText": "Guten Tag" }
                ]
            }
        }"#;

        let translated = GoogleTranslateClient::parse_response(body).unwrap();
        assert_eq!(translated, "Guten Morgen");
    }

    #[test]
    fn parse_rejects_empty_translation_list() {
        let body = r#"{ "data": { "translations": [] } }"#;

        let err = GoogleTranslateClient::parse_response(body).unwrap_err();
        assert!(matches!(err, TranslateError::Parse(_)));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = GoogleTranslateClient::parse_response("not json").unwrap_err();
        assert!(matches!(err, TranslateError::Parse(_)));
    }

    #[test]
    fn parse_rejects_missing_data_field() {
        let body = r#"{ "translations": [ { "translatedText": "x" } ] }"#;

        let err = GoogleTranslateClient::parse_response(body).unwrap_err();
        assert!(matches!(err, TranslateError::Parse(_)));
    }
}
