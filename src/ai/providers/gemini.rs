use crate::ai::client::{Responder, ResponderError, ResponderResult, SYSTEM_PROMPT};
use crate::config::AppConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

// Gemini API request types
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

// Gemini API response types; every level is optional so a partial body
// surfaces as a malformed response rather than a decode error.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// The single prompt string sent for a question.
pub fn build_prompt(question: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nUser: {question}\nAssistant:")
}

/// Pulls `candidates[0].content.parts[0].text` out of a response body, trimmed.
pub fn extract_answer(body: &str) -> ResponderResult<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| ResponderError::MalformedResponse(e.to_string()))?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    text.ok_or_else(|| ResponderError::MalformedResponse("missing candidate text".into()))
}

impl GeminiClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.gemini_endpoint.clone(), config.gemini_api_key.clone())
    }

    fn credential(&self) -> ResponderResult<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ResponderError::MissingCredential)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Responder for GeminiClient {
    async fn respond(&self, question: &str) -> ResponderResult<String> {
        let key = self.credential()?;
        let prompt = build_prompt(question);
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResponderError::Status { status, body });
        }

        let body = response.text().await?;
        extract_answer(&body)
    }
}
