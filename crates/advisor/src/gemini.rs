//! Advisor backed by the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{Advisor, AdvisorError, AdvisoryNote, AdvisoryRequest, prompt};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone, Debug)]
pub struct GeminiAdvisor {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl GenerateResponse {
    fn text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
    }
}

impl GeminiAdvisor {
    pub fn builder() -> GeminiAdvisorBuilder {
        GeminiAdvisorBuilder::default()
    }

    fn new(api_key: &str, base_url: &str, model: &str) -> Result<Self, AdvisorError> {
        if api_key.trim().is_empty() {
            return Err(AdvisorError::MissingCredentials);
        }
        if model.trim().is_empty() {
            return Err(AdvisorError::Config("model must not be empty".to_string()));
        }

        let mut key = header::HeaderValue::try_from(api_key.trim())
            .map_err(|err| AdvisorError::Config(format!("invalid API key header value: {err}")))?;
        key.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            model: model.trim().to_string(),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn body(prompt: &str) -> GenerateRequest<'_> {
        GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: json!({
                    "type": "OBJECT",
                    "properties": {
                        "explanation": { "type": "STRING" },
                        "culturalNote": { "type": "STRING" },
                        "negotiationTip": { "type": "STRING" },
                    },
                    "required": ["explanation", "culturalNote", "negotiationTip"],
                }),
            },
        }
    }
}

#[async_trait]
impl Advisor for GeminiAdvisor {
    async fn advise(&self, request: &AdvisoryRequest) -> Result<AdvisoryNote, AdvisorError> {
        let prompt = prompt::render(request);
        tracing::debug!(model = %self.model, "requesting advisory note");

        let resp = self
            .client
            .post(self.url())
            .json(&Self::body(&prompt))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => "server error".to_string(),
            };
            return Err(AdvisorError::Server { status, message });
        }

        let text = resp
            .json::<GenerateResponse>()
            .await?
            .text()
            .ok_or(AdvisorError::EmptyResponse)?;
        let note: AdvisoryNote = serde_json::from_str(&text)?;
        if !note.is_complete() {
            return Err(AdvisorError::Incomplete);
        }
        Ok(note)
    }

    fn name(&self) -> &str {
        "GeminiAdvisor"
    }
}

/// The builder for `GeminiAdvisor`.
#[derive(Default, Debug)]
pub struct GeminiAdvisorBuilder {
    api_key: String,
    base_url: Option<String>,
    model: Option<String>,
}

impl GeminiAdvisorBuilder {
    pub fn api_key(mut self, api_key: &str) -> GeminiAdvisorBuilder {
        self.api_key = api_key.to_string();
        self
    }

    /// Override the service root, e.g. to point at a local stub.
    pub fn base_url(mut self, base_url: &str) -> GeminiAdvisorBuilder {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn model(mut self, model: &str) -> GeminiAdvisorBuilder {
        self.model = Some(model.to_string());
        self
    }

    pub fn build(self) -> Result<GeminiAdvisor, AdvisorError> {
        let defaults = crate::AdvisorSettings::default();
        GeminiAdvisor::new(
            &self.api_key,
            self.base_url.as_deref().unwrap_or(&defaults.base_url),
            self.model.as_deref().unwrap_or(&defaults.model),
        )
    }
}
