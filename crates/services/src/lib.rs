#![forbid(unsafe_code)]

pub mod app_services;
pub mod context;
pub mod error;
pub mod generator;
pub mod narration;
pub mod progress;
pub mod sessions;

pub use malaab_core::Clock;

pub use app_services::AppServices;
pub use context::SessionContext;
pub use error::{AppServicesError, ConfigError, GenerationError};
pub use generator::{
    ContentBackend, ContentGenerator, GenerationRequest, GeneratorConfig, HttpContentBackend,
    MAX_GENERATION_ATTEMPTS,
};
pub use narration::{NARRATION_LANG, NarrationCommand, Narrator, UtteranceId};
pub use progress::{HISTORY_KEY, POINTS_KEY, ProgressStore};
pub use sessions::{
    CardPhase, CardSession, FetchOutcome, FillBlankSession, MultipleChoiceSession, OptionTone,
    QuizExercise, QuizPhase, QuizSession, ReadingSession, RequestTicket,
};
