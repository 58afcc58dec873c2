//! OpenAI-backed predictor.
//!
//! Blocking chat-completion client with bearer auth. The response must
//! carry the expected structure (`choices[0].message.content` holding
//! a JSON object of element-type id → quantity) or the whole call
//! fails with a [`PredictionError`] — the caller owns fallback policy.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use estima_core::catalog::ElementType;
use estima_core::config::PredictorConfig;
use estima_core::errors::{ConfigError, PredictionError};
use estima_core::traits::{IWeightPredictor, PredictionRequest};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ESTIMA_OPENAI_API_KEY";

const SYSTEM_PROMPT: &str = "You are a software estimation assistant. Given a requirement's \
title and description, estimate how many affected elements of each requested category the \
requirement implies. Respond with a single JSON object mapping the requested category ids \
(as strings) to non-negative numeric quantities, and nothing else.";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    response_format: ResponseFormat<'a>,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<String>,
    message: Option<String>,
}

/// Predictor backed by an OpenAI-compatible chat-completions endpoint.
#[derive(Debug)]
pub struct OpenAiPredictor {
    http: reqwest::blocking::Client,
    config: PredictorConfig,
    api_key: String,
}

impl OpenAiPredictor {
    /// Construct with an explicit API key. Fails fast, before any
    /// computation begins.
    pub fn new(config: PredictorConfig, api_key: &str) -> Result<Self, ConfigError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey { var: API_KEY_ENV });
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            config,
            api_key: api_key.to_string(),
        })
    }

    /// Construct reading the API key from [`API_KEY_ENV`].
    pub fn from_env(config: PredictorConfig) -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::MissingApiKey { var: API_KEY_ENV })?;
        Self::new(config, &api_key)
    }

    fn user_prompt(request: &PredictionRequest) -> String {
        let mut prompt = format!(
            "Requirement title: {}\nRequirement description: {}\n\nRequested categories:\n",
            request.title, request.body
        );
        for et in &request.element_types {
            let _ = writeln!(prompt, "  {}: {}", et.id(), et.label());
        }
        if !request.parameter_ids.is_empty() {
            let ids: Vec<String> = request.parameter_ids.iter().map(u64::to_string).collect();
            let _ = writeln!(prompt, "\nEstimation parameter ids: {}", ids.join(", "));
        }
        prompt
    }

    /// Map an error-status response onto the prediction taxonomy.
    fn classify_failure(status: reqwest::StatusCode, body: &str) -> PredictionError {
        let api_error = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error);

        let invalid_key = api_error
            .as_ref()
            .and_then(|e| e.code.as_deref())
            .map_or(false, |code| code == "invalid_api_key");

        if invalid_key || status == reqwest::StatusCode::UNAUTHORIZED {
            let reason = api_error
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.to_string());
            return PredictionError::Auth { reason };
        }

        PredictionError::Transport {
            reason: format!("predictor returned status {status}"),
        }
    }

    /// Parse the completion content: a JSON object of id → quantity.
    ///
    /// Ids outside the catalog are ignored; non-numeric quantities make
    /// the whole response malformed.
    fn parse_weights(content: &str) -> Result<HashMap<ElementType, f64>, PredictionError> {
        let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
            PredictionError::MalformedResponse {
                reason: format!("completion is not valid JSON: {e}"),
            }
        })?;

        let object = value
            .as_object()
            .ok_or_else(|| PredictionError::MalformedResponse {
                reason: "completion is not a JSON object".to_string(),
            })?;

        let mut weights = HashMap::new();
        for (key, raw) in object {
            let Some(element_type) = key.parse::<u32>().ok().and_then(ElementType::from_id)
            else {
                continue;
            };
            let quantity =
                raw.as_f64()
                    .ok_or_else(|| PredictionError::MalformedResponse {
                        reason: format!("quantity for id {key} is not numeric"),
                    })?;
            weights.insert(element_type, quantity);
        }
        Ok(weights)
    }
}

impl IWeightPredictor for OpenAiPredictor {
    fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<HashMap<ElementType, f64>, PredictionError> {
        let request_id = uuid::Uuid::new_v4();
        let user_prompt = Self::user_prompt(request);
        let body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
        };

        tracing::debug!(
            %request_id,
            types = request.element_types.len(),
            "prediction request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| PredictionError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().map_err(|e| PredictionError::Transport {
            reason: e.to_string(),
        })?;

        if !status.is_success() {
            let err = Self::classify_failure(status, &text);
            tracing::warn!(%request_id, error = %err, "prediction failed");
            return Err(err);
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| PredictionError::MalformedResponse {
                reason: format!("response body is not valid JSON: {e}"),
            })?;

        let content = parsed
            .choices
            .and_then(|mut choices| {
                if choices.is_empty() {
                    None
                } else {
                    choices.swap_remove(0).message
                }
            })
            .and_then(|message| message.content)
            .ok_or_else(|| PredictionError::MalformedResponse {
                reason: "response is missing choices[0].message.content".to_string(),
            })?;

        if content.trim().is_empty() {
            return Err(PredictionError::EmptyCompletion);
        }

        Self::parse_weights(&content)
    }
}
