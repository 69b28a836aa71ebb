use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, ingredient::ports::LLMClient};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn image_request(
        prompt: String,
        image_data: &[u8],
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: general_purpose::STANDARD.encode(image_data),
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model_name);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        Ok(first_text(gemini_response))
    }
}

/// Text of the first candidate, empty when the model returned nothing
fn first_text(response: GeminiResponse) -> String {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text);

    text.unwrap_or_else(|| {
        tracing::warn!("Gemini returned no candidates");
        String::new()
    })
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = Self::image_request(prompt, &image_data, mime_type, response_schema);

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_image_request_inlines_base64_with_mime_type() {
        let request = GeminiLLMClient::image_request(
            "list ingredients".to_string(),
            b"abc",
            "image/webp".to_string(),
            json!({ "type": "array" }),
        );

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{
                    "parts": [
                        { "text": "list ingredients" },
                        { "inline_data": { "mime_type": "image/webp", "data": "YWJj" } }
                    ]
                }],
                "generation_config": {
                    "response_mime_type": "application/json",
                    "response_schema": { "type": "array" }
                }
            })
        );
    }

    #[test]
    fn test_first_text_reads_first_candidate() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "[\"egg\"]" }], "role": "model" } },
                { "content": { "parts": [{ "text": "[\"milk\"]" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(first_text(response), "[\"egg\"]");
    }

    #[test]
    fn test_first_text_without_candidates_is_empty() {
        let response: GeminiResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();

        assert_eq!(first_text(response), "");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = GeminiLLMClient::new(
            "key".to_string(),
            "gemini-2.0-flash".to_string(),
            format!("{DEFAULT_GEMINI_BASE_URL}/"),
        );

        assert_eq!(client.base_url, DEFAULT_GEMINI_BASE_URL);
    }
}
