//! Resolve Answer use case.
//!
//! Turns a question about an optional image into an [`AnswerResult`].
//!
//! Two paths exist:
//!
//! - **Rule-based**: classify the question by keyword, pick an exemplar from
//!   the [`AnswerBank`], draw a decorative confidence. No I/O.
//! - **Model-backed**: call the injected [`InferenceProvider`] under a time
//!   budget, normalize its text, and take its score when it reports one.
//!
//! Provider failures are returned as errors. They are never replaced by a
//! rule-based answer.

use crate::config::ResolverParams;
use crate::ports::inference_provider::{InferenceError, InferenceProvider, PredictRequest};
use crate::ports::progress::{NoProgress, ResolveProgressNotifier};
use crate::ports::random_source::RandomSource;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use vqa_domain::{
    AnswerBank, AnswerCategory, AnswerResult, ConfidenceSource, ImageHandle, Question,
    ResolutionMode, ResolverMode, classify, normalize_answer, truncate_str,
};

/// Errors surfaced to the renderer.
#[derive(Error, Debug)]
pub enum ResolveAnswerError {
    #[error("Please enter a question")]
    EmptyQuestion,

    #[error("Please upload an image to ask the model about")]
    MissingImage,

    #[error("Inference provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Inference provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("Operation cancelled")]
    Cancelled,
}

impl ResolveAnswerError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ResolveAnswerError::Cancelled)
    }
}

/// Input for the [`ResolveAnswerUseCase`].
#[derive(Debug, Clone)]
pub struct ResolveAnswerInput {
    /// Raw question text as typed by the user.
    pub question: String,
    /// Uploaded image, if any.
    pub image: Option<ImageHandle>,
    /// Requested resolution path.
    pub mode: ResolverMode,
}

impl ResolveAnswerInput {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            image: None,
            mode: ResolverMode::Auto,
        }
    }

    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_mode(mut self, mode: ResolverMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Use case for resolving an answer.
pub struct ResolveAnswerUseCase {
    provider: Option<Arc<dyn InferenceProvider>>,
    random: Mutex<Box<dyn RandomSource>>,
    params: ResolverParams,
    cancellation_token: Option<CancellationToken>,
}

impl ResolveAnswerUseCase {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self {
            provider: None,
            random: Mutex::new(random),
            params: ResolverParams::default(),
            cancellation_token: None,
        }
    }

    /// Attach an inference provider, enabling the model-backed path.
    pub fn with_provider(mut self, provider: Arc<dyn InferenceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_params(mut self, params: ResolverParams) -> Self {
        self.params = params;
        self
    }

    /// Abandon an in-flight provider call when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn params(&self) -> &ResolverParams {
        &self.params
    }

    /// Resolution path `mode` settles to with this use case's wiring.
    pub fn effective_mode(&self, mode: ResolverMode) -> ResolutionMode {
        mode.effective(self.has_provider())
    }

    /// Resolve an already validated question in [`ResolverMode::Auto`].
    pub async fn resolve(
        &self,
        image: Option<&ImageHandle>,
        question: &Question,
    ) -> Result<AnswerResult, ResolveAnswerError> {
        let mut input = ResolveAnswerInput::new(question.content());
        if let Some(image) = image {
            input = input.with_image(image.clone());
        }
        self.execute(input).await
    }

    /// Execute with default (no-op) progress
    pub async fn execute(
        &self,
        input: ResolveAnswerInput,
    ) -> Result<AnswerResult, ResolveAnswerError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ResolveAnswerInput,
        progress: &dyn ResolveProgressNotifier,
    ) -> Result<AnswerResult, ResolveAnswerError> {
        let question =
            Question::try_new(input.question).map_err(|_| ResolveAnswerError::EmptyQuestion)?;
        let mode = self.effective_mode(input.mode);

        info!(
            "Resolving ({}): {}",
            mode,
            truncate_str(question.content(), 100)
        );
        progress.on_resolve_start(mode);

        let result = match mode {
            ResolutionMode::RuleBased => {
                Ok(self.resolve_rule_based(&question, input.image.is_some()))
            }
            ResolutionMode::ModelBacked => {
                self.resolve_with_provider(input.image, question, progress)
                    .await
            }
        };

        match &result {
            Ok(answer) => {
                debug!(
                    "Resolved with confidence {:.4} ({:?})",
                    answer.confidence(),
                    answer.confidence_source()
                );
                progress.on_resolve_complete(Some(answer));
            }
            Err(e) => {
                warn!("Resolution failed: {}", e);
                progress.on_resolve_complete(None);
            }
        }

        result
    }

    /// Keyword-based resolution.
    ///
    /// Pure function of the question and the random stream. The image only
    /// contributes a presence flag, which is logged.
    pub fn resolve_rule_based(&self, question: &Question, has_image: bool) -> AnswerResult {
        let mut random = self.random.lock().unwrap_or_else(|e| e.into_inner());

        let category = match classify(question) {
            Some(category) => category,
            None => {
                let category = *pick(&mut **random, &AnswerCategory::ALL);
                debug!("No keyword matched, picked category {} at random", category);
                category
            }
        };
        let answer = *pick(&mut **random, AnswerBank::candidates(category));
        let confidence = self.params.rule_based_band.sample(random.next_unit());

        debug!("Rule-based: category={}, has_image={}", category, has_image);
        AnswerResult::rule_based(category, answer, confidence)
    }

    async fn resolve_with_provider(
        &self,
        image: Option<ImageHandle>,
        question: Question,
        progress: &dyn ResolveProgressNotifier,
    ) -> Result<AnswerResult, ResolveAnswerError> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            ResolveAnswerError::ProviderUnavailable("no inference provider configured".to_string())
        })?;
        let image = image.ok_or(ResolveAnswerError::MissingImage)?;

        let max_tokens = self.params.max_answer_tokens;
        let request = PredictRequest::new(image, question, max_tokens);

        debug!(
            "Calling provider {} with {} image",
            provider.name(),
            request.image.describe()
        );
        progress.on_provider_request(provider.name());

        let call = async {
            match self.params.provider_timeout {
                Some(budget) => match tokio::time::timeout(budget, provider.predict(&request)).await
                {
                    Ok(result) => result.map_err(|e| self.map_inference_error(e)),
                    Err(_) => Err(ResolveAnswerError::Timeout(budget)),
                },
                None => provider
                    .predict(&request)
                    .await
                    .map_err(|e| self.map_inference_error(e)),
            }
        };

        let prediction = match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(ResolveAnswerError::Cancelled),
                    result = call => result,
                }
            }
            None => call.await,
        }?;

        let answer = normalize_answer(&prediction.text, max_tokens).ok_or_else(|| {
            ResolveAnswerError::ProviderUnavailable(format!(
                "{} returned an empty answer",
                provider.name()
            ))
        })?;

        let (confidence, source) = match prediction.score {
            Some(score) if (0.0..=1.0).contains(&score) => (score, ConfidenceSource::Model),
            Some(score) => {
                warn!("Ignoring out-of-range provider score {}", score);
                (self.draw_model_confidence(), ConfidenceSource::Decorative)
            }
            None => (self.draw_model_confidence(), ConfidenceSource::Decorative),
        };

        Ok(AnswerResult::model_backed(answer, confidence, source))
    }

    // TODO: derive a real score from output-token log-probabilities once the
    // HTTP provider exposes them; until then this is a placeholder draw.
    fn draw_model_confidence(&self) -> f64 {
        let mut random = self.random.lock().unwrap_or_else(|e| e.into_inner());
        self.params.model_band.sample(random.next_unit())
    }

    fn map_inference_error(&self, error: InferenceError) -> ResolveAnswerError {
        match error {
            InferenceError::Timeout => ResolveAnswerError::Timeout(
                self.params
                    .provider_timeout
                    .unwrap_or(crate::config::resolver_params::DEFAULT_PROVIDER_TIMEOUT),
            ),
            other => ResolveAnswerError::ProviderUnavailable(other.to_string()),
        }
    }
}

fn pick<'a, T>(random: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    let index = random.next_index(items.len()).min(items.len() - 1);
    &items[index]
}
