//! Shared error types for the services crate.

use thiserror::Error;

use malaab_core::model::{ExerciseKind, ShapeError};
use storage::sqlite::SqliteInitError;

/// Startup configuration problems. These are fatal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("no API key configured; set MALAAB_API_KEY")]
    MissingApiKey,
    #[error("invalid generation service URL: {0}")]
    InvalidBaseUrl(String),
}

/// Errors emitted by `ContentGenerator`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("generation service returned an empty response")]
    EmptyResponse,
    #[error("generated {kind:?} payload is not valid JSON: {source}")]
    Malformed {
        kind: ExerciseKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("generated {kind:?} payload still invalid after {attempts} attempts: {last}")]
    ShapeRetriesExhausted {
        kind: ExerciseKind,
        attempts: u32,
        last: ShapeError,
    },
    #[error("requested {expected:?} but received {actual:?}")]
    UnexpectedKind {
        expected: ExerciseKind,
        actual: ExerciseKind,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
