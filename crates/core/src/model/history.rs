use serde::{Deserialize, Serialize};

use crate::model::attempt::{Attempt, AttemptRecord};
use crate::model::exercise::{
    ExerciseKind, FillBlankExercise, MultipleChoiceExercise, ReadingExercise,
};

/// Answered exercises per graded kind, newest first.
///
/// Each kind has its own list, so recording an attempt for one kind can
/// never touch another kind's entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    fill_blank: Vec<Attempt<FillBlankExercise>>,
    multiple_choice: Vec<Attempt<MultipleChoiceExercise>>,
    reading_comprehension: Vec<Attempt<ReadingExercise>>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an attempt to its kind's list.
    pub fn record(&mut self, record: AttemptRecord) {
        match record {
            AttemptRecord::FillBlank(attempt) => self.fill_blank.insert(0, attempt),
            AttemptRecord::MultipleChoice(attempt) => self.multiple_choice.insert(0, attempt),
            AttemptRecord::ReadingComprehension(attempt) => {
                self.reading_comprehension.insert(0, attempt);
            }
        }
    }

    #[must_use]
    pub fn fill_blank(&self) -> &[Attempt<FillBlankExercise>] {
        &self.fill_blank
    }

    #[must_use]
    pub fn multiple_choice(&self) -> &[Attempt<MultipleChoiceExercise>] {
        &self.multiple_choice
    }

    #[must_use]
    pub fn reading_comprehension(&self) -> &[Attempt<ReadingExercise>] {
        &self.reading_comprehension
    }

    /// Number of attempts stored for `kind`. Cards never have any.
    #[must_use]
    pub fn len_for(&self, kind: ExerciseKind) -> usize {
        match kind {
            ExerciseKind::FillBlank => self.fill_blank.len(),
            ExerciseKind::MultipleChoice => self.multiple_choice.len(),
            ExerciseKind::ReadingComprehension => self.reading_comprehension.len(),
            ExerciseKind::EducationalCard => 0,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.fill_blank.len() + self.multiple_choice.len() + self.reading_comprehension.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
