use std::{fmt, sync::Arc, time::Duration};

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::{
    config::Config,
    constants::{
        fallback_recommendations::FALLBACK_RECOMMENDATIONS, prompts::SYSTEM_PROMPT,
        question_bank::QUESTION_BANK,
    },
    models::domain::{AnswerSheet, QuizQuestion, Recommendations},
    services::{
        completion_client::{
            CompletionClient, CompletionError, CompletionRequest, OpenAiCompletionClient,
        },
        prompt_builder::build_user_prompt,
        response_parser::{parse_recommendations, ParseError},
    },
};

const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    #[error("completion API credentials are not configured")]
    Configuration,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("completion request timed out after {0:?}")]
    Timeout(Duration),

    #[error("completion request rejected: {0}")]
    Rejected(String),

    #[error("could not parse model output: {0}")]
    Parse(#[from] ParseError),

    #[error("recommendation task ended without a result: {0}")]
    Aborted(String),
}

impl From<CompletionError> for RecommendationError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Transport(message) => RecommendationError::Transport(message),
            CompletionError::Rejected(message) => RecommendationError::Rejected(message),
            CompletionError::EmptyResponse => RecommendationError::Parse(ParseError::Empty),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationSource {
    Model,
    Fallback(RecommendationError),
}

impl RecommendationSource {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationSource::Model => "model",
            RecommendationSource::Fallback(_) => "fallback",
        }
    }
}

/// Always carries a complete structure; `source` says where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationOutcome {
    pub recommendations: Recommendations,
    pub source: RecommendationSource,
}

impl RecommendationOutcome {
    pub fn fallback(reason: RecommendationError) -> Self {
        Self {
            recommendations: FALLBACK_RECOMMENDATIONS.clone(),
            source: RecommendationSource::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, RecommendationSource::Fallback(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenerationPhase {
    Idle,
    Requesting,
    Parsing,
    Failed,
    FallbackSubstituted,
    Done,
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationPhase::Idle => write!(f, "idle"),
            GenerationPhase::Requesting => write!(f, "requesting"),
            GenerationPhase::Parsing => write!(f, "parsing"),
            GenerationPhase::Failed => write!(f, "failed"),
            GenerationPhase::FallbackSubstituted => write!(f, "fallback_substituted"),
            GenerationPhase::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub timeout: Duration,
    pub transport_retries: u32,
    pub retry_backoff: Duration,
}

impl GenerationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.openai_model.clone(),
            max_tokens: config.openai_max_tokens,
            temperature: config.openai_temperature,
            presence_penalty: config.openai_presence_penalty,
            frequency_penalty: config.openai_frequency_penalty,
            timeout: config.request_timeout(),
            transport_retries: config.openai_transport_retries,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }
}

pub struct RecommendationService {
    client: Option<Arc<dyn CompletionClient>>,
    settings: GenerationSettings,
    bank: &'static [QuizQuestion],
}

impl RecommendationService {
    /// `client` is `None` when no credentials are configured; every request
    /// then resolves to the fallback.
    pub fn new(client: Option<Arc<dyn CompletionClient>>, settings: GenerationSettings) -> Self {
        Self {
            client,
            settings,
            bank: QUESTION_BANK,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = config.openai_api_key.as_ref().map(|api_key| {
            Arc::new(OpenAiCompletionClient::new(api_key, &config.openai_api_base))
                as Arc<dyn CompletionClient>
        });

        if client.is_none() {
            log::warn!("No OpenAI API key configured, all recommendations will use fallback content");
        }

        Self::new(client, GenerationSettings::from_config(config))
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn build_request(&self, answers: &AnswerSheet) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: build_user_prompt(answers, self.bank),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
            presence_penalty: self.settings.presence_penalty,
            frequency_penalty: self.settings.frequency_penalty,
        }
    }

    /// Never fails: any error on the model path is logged and replaced by the
    /// fallback in full.
    pub async fn generate(&self, answers: &AnswerSheet) -> RecommendationOutcome {
        log::debug!("Recommendation generation {} ({} answers)", GenerationPhase::Idle, answers.len());

        match self.try_generate(answers).await {
            Ok(recommendations) => {
                log::debug!("Recommendation generation {}", GenerationPhase::Done);
                log::info!("Generated recommendations from model {}", self.settings.model);
                RecommendationOutcome {
                    recommendations,
                    source: RecommendationSource::Model,
                }
            }
            Err(reason) => {
                log::debug!("Recommendation generation {}", GenerationPhase::Failed);
                log::warn!("Serving fallback recommendations: {}", reason);
                let outcome = RecommendationOutcome::fallback(reason);
                log::debug!("Recommendation generation {}", GenerationPhase::FallbackSubstituted);
                log::debug!("Recommendation generation {}", GenerationPhase::Done);
                outcome
            }
        }
    }

    async fn try_generate(&self, answers: &AnswerSheet) -> Result<Recommendations, RecommendationError> {
        let client = self.client.as_ref().ok_or(RecommendationError::Configuration)?;
        let request = self.build_request(answers);

        log::debug!("Recommendation generation {}", GenerationPhase::Requesting);
        let text = self.request_with_retry(client.as_ref(), &request).await?;

        log::debug!("Recommendation generation {}", GenerationPhase::Parsing);
        parse_recommendations(&text).map_err(|err| {
            log::debug!("Unparseable model output: {}", text);
            RecommendationError::from(err)
        })
    }

    async fn request_with_retry(
        &self,
        client: &dyn CompletionClient,
        request: &CompletionRequest,
    ) -> Result<String, RecommendationError> {
        let mut attempt = 0;

        loop {
            let failure = match tokio::time::timeout(self.settings.timeout, client.complete(request)).await {
                Ok(Ok(text)) => return Ok(text),
                Ok(Err(err)) if !err.is_retryable() => return Err(err.into()),
                Ok(Err(err)) => RecommendationError::from(err),
                Err(_) => RecommendationError::Timeout(self.settings.timeout),
            };

            if attempt >= self.settings.transport_retries {
                return Err(failure);
            }

            attempt += 1;
            log::warn!(
                "Completion attempt {} failed ({}), retrying in {:?}",
                attempt,
                failure,
                self.settings.retry_backoff
            );
            tokio::time::sleep(self.settings.retry_backoff).await;
        }
    }

    /// Like [`generate`](Self::generate) but yields `None` once `token` is
    /// cancelled, so a result is never applied to a session that moved on.
    pub async fn generate_with_cancel(
        &self,
        answers: &AnswerSheet,
        token: &CancellationToken,
    ) -> Option<RecommendationOutcome> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                log::info!("Recommendation request cancelled, discarding result");
                None
            }
            outcome = self.generate(answers) => {
                if token.is_cancelled() {
                    None
                } else {
                    Some(outcome)
                }
            }
        }
    }

    /// Runs the generation on its own task. Dropping or cancelling the
    /// returned handle discards the result.
    pub fn spawn(self: &Arc<Self>, answers: AnswerSheet) -> RecommendationTask {
        let token = CancellationToken::new();
        let service = Arc::clone(self);
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            service.generate_with_cancel(&answers, &task_token).await
        });

        RecommendationTask {
            guard: token.clone().drop_guard(),
            token,
            handle,
        }
    }
}

pub struct RecommendationTask {
    token: CancellationToken,
    handle: JoinHandle<Option<RecommendationOutcome>>,
    guard: DropGuard,
}

impl RecommendationTask {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// `None` when the task was cancelled or panicked.
    pub async fn join(self) -> Option<RecommendationOutcome> {
        let RecommendationTask {
            token: _,
            handle,
            guard,
        } = self;

        let result = handle.await;
        guard.disarm();

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("Recommendation task failed: {}", err);
                None
            }
        }
    }
}
