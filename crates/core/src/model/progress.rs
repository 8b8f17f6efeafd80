use serde::{Deserialize, Serialize};

use crate::model::attempt::AttemptRecord;
use crate::model::history::History;

/// Points granted for every correct answer.
pub const POINTS_PER_CORRECT: u64 = 10;

/// Accumulated score. Only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(u64);

impl Points {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Add the fixed award and return the amount added.
    pub fn award(&mut self) -> u64 {
        self.0 = self.0.saturating_add(POINTS_PER_CORRECT);
        POINTS_PER_CORRECT
    }
}

/// What happened when an attempt was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOutcome {
    pub correct: bool,
    pub awarded: u64,
}

/// Everything that survives a restart: points and history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    points: Points,
    history: History,
}

impl Progress {
    #[must_use]
    pub fn new(points: Points, history: History) -> Self {
        Self { points, history }
    }

    #[must_use]
    pub fn points(&self) -> Points {
        self.points
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Store the attempt and award points if it was answered correctly.
    pub fn record(&mut self, record: AttemptRecord) -> RecordOutcome {
        let correct = record.is_correct();
        let awarded = if correct { self.points.award() } else { 0 };
        self.history.record(record);
        RecordOutcome { correct, awarded }
    }
}
