use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::exercise::{
    ExerciseKind, FillBlankExercise, Graded, MultipleChoiceExercise, ReadingExercise,
};

/// A submitted exercise paired with the answer the student picked.
///
/// Created once per submission and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt<E> {
    exercise: E,
    selected_answer: String,
    answered_at: DateTime<Utc>,
}

impl<E: Graded> Attempt<E> {
    #[must_use]
    pub fn new(exercise: E, selected_answer: impl Into<String>, answered_at: DateTime<Utc>) -> Self {
        Self {
            exercise,
            selected_answer: selected_answer.into(),
            answered_at,
        }
    }

    #[must_use]
    pub fn exercise(&self) -> &E {
        &self.exercise
    }

    #[must_use]
    pub fn selected_answer(&self) -> &str {
        &self.selected_answer
    }

    #[must_use]
    pub fn answered_at(&self) -> DateTime<Utc> {
        self.answered_at
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.exercise.is_correct(&self.selected_answer)
    }
}

/// An attempt of any graded kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttemptRecord {
    FillBlank(Attempt<FillBlankExercise>),
    MultipleChoice(Attempt<MultipleChoiceExercise>),
    ReadingComprehension(Attempt<ReadingExercise>),
}

impl AttemptRecord {
    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        match self {
            AttemptRecord::FillBlank(_) => ExerciseKind::FillBlank,
            AttemptRecord::MultipleChoice(_) => ExerciseKind::MultipleChoice,
            AttemptRecord::ReadingComprehension(_) => ExerciseKind::ReadingComprehension,
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        match self {
            AttemptRecord::FillBlank(attempt) => attempt.is_correct(),
            AttemptRecord::MultipleChoice(attempt) => attempt.is_correct(),
            AttemptRecord::ReadingComprehension(attempt) => attempt.is_correct(),
        }
    }

    #[must_use]
    pub fn selected_answer(&self) -> &str {
        match self {
            AttemptRecord::FillBlank(attempt) => attempt.selected_answer(),
            AttemptRecord::MultipleChoice(attempt) => attempt.selected_answer(),
            AttemptRecord::ReadingComprehension(attempt) => attempt.selected_answer(),
        }
    }
}

impl From<Attempt<FillBlankExercise>> for AttemptRecord {
    fn from(attempt: Attempt<FillBlankExercise>) -> Self {
        AttemptRecord::FillBlank(attempt)
    }
}

impl From<Attempt<MultipleChoiceExercise>> for AttemptRecord {
    fn from(attempt: Attempt<MultipleChoiceExercise>) -> Self {
        AttemptRecord::MultipleChoice(attempt)
    }
}

impl From<Attempt<ReadingExercise>> for AttemptRecord {
    fn from(attempt: Attempt<ReadingExercise>) -> Self {
        AttemptRecord::ReadingComprehension(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn exercise() -> MultipleChoiceExercise {
        MultipleChoiceExercise {
            question: "أين يقف حارس المرمى؟".into(),
            options: vec!["المرمى".into(), "الوسط".into(), "الجناح".into(), "المدرجات".into()],
            correct_answer: "المرمى".into(),
            explanation: String::new(),
        }
    }

    #[test]
    fn correctness_is_exact_match() {
        let right = Attempt::new(exercise(), "المرمى", fixed_now());
        let wrong = Attempt::new(exercise(), "الوسط", fixed_now());
        assert!(right.is_correct());
        assert!(!wrong.is_correct());
    }

    #[test]
    fn record_keeps_kind_and_selection() {
        let record = AttemptRecord::from(Attempt::new(exercise(), "الجناح", fixed_now()));
        assert_eq!(record.kind(), ExerciseKind::MultipleChoice);
        assert_eq!(record.selected_answer(), "الجناح");
        assert!(!record.is_correct());
    }
}
