//! HTTP inference provider
//!
//! Posts the question and a base64-encoded image to a VQA service:
//!
//! ```json
//! // request
//! {"model": "...", "question": "...", "image": "<base64>", "image_format": "png", "max_new_tokens": 50}
//! // response
//! {"answer": "two dogs", "score": 0.91}
//! ```
//!
//! `score` is optional. The model itself is loaded and cached by the service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use vqa_application::{InferenceError, InferenceProvider, PredictRequest, Prediction};
use vqa_domain::truncate_str;

/// Longest error body echoed back in messages
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Serialize)]
struct VqaRequestBody<'a> {
    model: &'a str,
    question: &'a str,
    image: String,
    image_format: &'static str,
    max_new_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct VqaResponseBody {
    answer: Option<String>,
    #[serde(default)]
    score: Option<f64>,
}

/// [`InferenceProvider`] that calls a remote VQA endpoint over HTTP
#[derive(Debug, Clone)]
pub struct HttpInferenceProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl HttpInferenceProvider {
    /// Build the provider and its HTTP client.
    ///
    /// `timeout` is enforced by the client as well as by the resolver, so an
    /// abandoned request does not linger on the connection pool.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, InferenceError> {
        let mut builder = reqwest::Client::builder().user_agent("vqa-demo/0.3");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| InferenceError::Unavailable(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
        })
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body<'a>(&'a self, request: &'a PredictRequest) -> VqaRequestBody<'a> {
        VqaRequestBody {
            model: &self.model,
            question: request.question.content(),
            image: base64::encode(request.image.bytes()),
            image_format: request.image.format().as_str(),
            max_new_tokens: request.max_new_tokens,
        }
    }
}

fn parse_response(body: &str) -> Result<Prediction, InferenceError> {
    let parsed: VqaResponseBody = serde_json::from_str(body).map_err(|e| {
        InferenceError::MalformedOutput(format!(
            "{e}; body: {}",
            truncate_str(body, MAX_ERROR_BODY)
        ))
    })?;

    let answer = parsed
        .answer
        .ok_or_else(|| InferenceError::MalformedOutput("response has no \"answer\" field".to_string()))?;

    Ok(Prediction {
        text: answer,
        score: parsed.score,
    })
}

fn map_transport_error(error: reqwest::Error) -> InferenceError {
    if error.is_timeout() {
        InferenceError::Timeout
    } else if error.is_connect() {
        InferenceError::Unavailable(error.to_string())
    } else {
        InferenceError::RequestFailed(error.to_string())
    }
}

#[async_trait]
impl InferenceProvider for HttpInferenceProvider {
    fn name(&self) -> &str {
        &self.model
    }

    async fn predict(&self, request: &PredictRequest) -> Result<Prediction, InferenceError> {
        let body = self.request_body(request);
        debug!(
            "POST {} ({} bytes of {} image)",
            self.endpoint,
            request.image.bytes().len(),
            body.image_format
        );

        let mut http = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            http = http.bearer_auth(key);
        }

        let response = http.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Err(InferenceError::Unavailable(format!(
                "{} is not ready: {}",
                self.endpoint,
                truncate_str(&text, MAX_ERROR_BODY)
            )));
        }
        if !status.is_success() {
            return Err(InferenceError::RequestFailed(format!(
                "HTTP error: {} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                truncate_str(&text, MAX_ERROR_BODY)
            )));
        }

        parse_response(&text)
    }
}
