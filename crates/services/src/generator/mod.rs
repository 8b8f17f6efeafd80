//! Exercise generation over an external generative-content service.

mod http;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use malaab_core::model::{CardLevel, Exercise, ExerciseKind, ExercisePayload};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::GenerationError;

pub use http::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeneratorConfig, HttpContentBackend};

/// How many times a request is sent before a shape failure is final.
pub const MAX_GENERATION_ATTEMPTS: u32 = 4;

/// One call to the generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub instruction: String,
    pub schema: Value,
}

impl GenerationRequest {
    #[must_use]
    pub fn for_kind(model: impl Into<String>, kind: ExerciseKind, level: Option<CardLevel>) -> Self {
        Self {
            model: model.into(),
            instruction: prompts::instruction(kind, level),
            schema: prompts::schema(kind),
        }
    }
}

/// Transport to the generation service. Returns the raw JSON text.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns `GenerationError` when the service cannot be reached or
    /// answers with an error.
    async fn complete(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Builds requests, parses replies and re-asks when a reply has the wrong shape.
#[derive(Clone)]
pub struct ContentGenerator {
    backend: Arc<dyn ContentBackend>,
    model: String,
    max_attempts: u32,
}

impl ContentGenerator {
    #[must_use]
    pub fn new(backend: Arc<dyn ContentBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn from_config(config: GeneratorConfig) -> Self {
        let model = config.model.clone();
        Self::new(Arc::new(HttpContentBackend::new(config)), model)
    }

    /// Override the attempt cap. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Generate one validated exercise of `kind`.
    ///
    /// `level` only affects educational cards.
    ///
    /// # Errors
    ///
    /// Transport failures and malformed JSON are returned at once.
    /// Shape failures are retried up to the attempt cap, then returned as
    /// `GenerationError::ShapeRetriesExhausted`.
    pub async fn generate(
        &self,
        kind: ExerciseKind,
        level: Option<CardLevel>,
    ) -> Result<Exercise, GenerationError> {
        let request = GenerationRequest::for_kind(&self.model, kind, level);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let text = self.backend.complete(&request).await?;
            let exercise = parse_exercise(kind, &text)?;

            match exercise.validate() {
                Ok(()) => {
                    debug!(kind = kind.as_str(), attempt, "generated exercise accepted");
                    return Ok(exercise);
                }
                Err(last) if attempt >= self.max_attempts => {
                    warn!(kind = kind.as_str(), attempt, error = %last, "giving up on exercise generation");
                    return Err(GenerationError::ShapeRetriesExhausted {
                        kind,
                        attempts: attempt,
                        last,
                    });
                }
                Err(err) => {
                    warn!(kind = kind.as_str(), attempt, error = %err, "generated exercise rejected, asking again");
                }
            }
        }
    }

    /// Typed variant of [`ContentGenerator::generate`].
    ///
    /// # Errors
    ///
    /// Same as `generate`, plus `UnexpectedKind` if the payload type does
    /// not match what came back.
    pub async fn generate_payload<P: ExercisePayload>(
        &self,
        level: Option<CardLevel>,
    ) -> Result<P, GenerationError> {
        let exercise = self.generate(P::KIND, level).await?;
        let actual = exercise.kind();
        P::from_exercise(exercise).ok_or(GenerationError::UnexpectedKind {
            expected: P::KIND,
            actual,
        })
    }
}

fn parse_exercise(kind: ExerciseKind, text: &str) -> Result<Exercise, GenerationError> {
    let malformed = |source| GenerationError::Malformed { kind, source };
    let exercise = match kind {
        ExerciseKind::FillBlank => {
            Exercise::FillBlank(serde_json::from_str(text).map_err(malformed)?)
        }
        ExerciseKind::MultipleChoice => {
            Exercise::MultipleChoice(serde_json::from_str(text).map_err(malformed)?)
        }
        ExerciseKind::ReadingComprehension => {
            Exercise::ReadingComprehension(serde_json::from_str(text).map_err(malformed)?)
        }
        ExerciseKind::EducationalCard => {
            Exercise::EducationalCard(serde_json::from_str(text).map_err(malformed)?)
        }
    };
    Ok(exercise)
}
