use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of candidate answers every graded exercise carries.
pub const OPTION_COUNT: usize = 4;

/// Marker the generator puts where the missing word goes.
pub const BLANK_PLACEHOLDER: &str = "___";

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Reasons a generated payload does not have the shape an exercise needs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeError {
    #[error("expected {expected} options, got {actual}")]
    OptionCount { expected: usize, actual: usize },

    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },

    #[error("correct answer {answer:?} is not one of the options")]
    AnswerNotInOptions { answer: String },

    #[error("sentence must contain exactly one blank, found {found}")]
    Placeholder { found: usize },

    #[error("field `{0}` is empty")]
    EmptyField(&'static str),
}

//
// ─── KIND ─────────────────────────────────────────────────────────────────────
//

/// The four kinds of exercise the app can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    FillBlank,
    MultipleChoice,
    ReadingComprehension,
    EducationalCard,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 4] = [
        ExerciseKind::FillBlank,
        ExerciseKind::MultipleChoice,
        ExerciseKind::ReadingComprehension,
        ExerciseKind::EducationalCard,
    ];

    /// Graded kinds have a correct answer and produce attempt records.
    #[must_use]
    pub fn is_graded(self) -> bool {
        !matches!(self, ExerciseKind::EducationalCard)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseKind::FillBlank => "fill_blank",
            ExerciseKind::MultipleChoice => "multiple_choice",
            ExerciseKind::ReadingComprehension => "reading_comprehension",
            ExerciseKind::EducationalCard => "educational_card",
        }
    }
}

//
// ─── PAYLOADS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillBlankExercise {
    pub sentence: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl FillBlankExercise {
    /// Splits the sentence around its blank.
    ///
    /// Returns the whole sentence and an empty tail if the blank is missing.
    #[must_use]
    pub fn split_sentence(&self) -> (&str, &str) {
        self.sentence
            .split_once(BLANK_PLACEHOLDER)
            .unwrap_or((self.sentence.as_str(), ""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoiceExercise {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingExercise {
    pub paragraph: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationalCard {
    pub concept: String,
    pub explanation: String,
    pub example: String,
}

impl EducationalCard {
    /// Checks that every field carries text.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::EmptyField` naming the first blank field.
    pub fn validate(&self) -> Result<(), ShapeError> {
        require_text("concept", &self.concept)?;
        require_text("explanation", &self.explanation)?;
        require_text("example", &self.example)
    }
}

//
// ─── GRADED ───────────────────────────────────────────────────────────────────
//

/// A concrete payload that can be wrapped in, or taken out of, `Exercise`.
pub trait ExercisePayload: Sized {
    const KIND: ExerciseKind;

    fn from_exercise(exercise: Exercise) -> Option<Self>;
    fn into_exercise(self) -> Exercise;
}

/// Exercises with a fixed set of candidates and a single correct one.
pub trait Graded: ExercisePayload {
    fn options(&self) -> &[String];
    fn correct_answer(&self) -> &str;

    /// Exact string comparison against the designated answer.
    fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer()
    }

    /// Checks the four-options / answer-membership invariant.
    ///
    /// # Errors
    ///
    /// Returns the first `ShapeError` found.
    fn validate(&self) -> Result<(), ShapeError> {
        validate_choices(self.options(), self.correct_answer())
    }
}

impl Graded for FillBlankExercise {
    fn options(&self) -> &[String] {
        &self.options
    }

    fn correct_answer(&self) -> &str {
        &self.answer
    }

    fn validate(&self) -> Result<(), ShapeError> {
        require_text("sentence", &self.sentence)?;
        let found = self.sentence.matches(BLANK_PLACEHOLDER).count();
        if found != 1 {
            return Err(ShapeError::Placeholder { found });
        }
        validate_choices(&self.options, &self.answer)
    }
}

impl Graded for MultipleChoiceExercise {
    fn options(&self) -> &[String] {
        &self.options
    }

    fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    fn validate(&self) -> Result<(), ShapeError> {
        require_text("question", &self.question)?;
        validate_choices(&self.options, &self.correct_answer)
    }
}

impl Graded for ReadingExercise {
    fn options(&self) -> &[String] {
        &self.options
    }

    fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    fn validate(&self) -> Result<(), ShapeError> {
        require_text("paragraph", &self.paragraph)?;
        require_text("question", &self.question)?;
        validate_choices(&self.options, &self.correct_answer)
    }
}

macro_rules! impl_payload {
    ($payload:ty, $variant:ident) => {
        impl ExercisePayload for $payload {
            const KIND: ExerciseKind = ExerciseKind::$variant;

            fn from_exercise(exercise: Exercise) -> Option<Self> {
                match exercise {
                    Exercise::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_exercise(self) -> Exercise {
                Exercise::$variant(self)
            }
        }
    };
}

impl_payload!(FillBlankExercise, FillBlank);
impl_payload!(MultipleChoiceExercise, MultipleChoice);
impl_payload!(ReadingExercise, ReadingComprehension);
impl_payload!(EducationalCard, EducationalCard);

fn validate_choices(options: &[String], answer: &str) -> Result<(), ShapeError> {
    if options.len() != OPTION_COUNT {
        return Err(ShapeError::OptionCount {
            expected: OPTION_COUNT,
            actual: options.len(),
        });
    }
    for (index, option) in options.iter().enumerate() {
        if options[..index].contains(option) {
            return Err(ShapeError::DuplicateOption {
                option: option.clone(),
            });
        }
    }
    if !options.iter().any(|option| option == answer) {
        return Err(ShapeError::AnswerNotInOptions {
            answer: answer.to_owned(),
        });
    }
    Ok(())
}

fn require_text(field: &'static str, value: &str) -> Result<(), ShapeError> {
    if value.trim().is_empty() {
        return Err(ShapeError::EmptyField(field));
    }
    Ok(())
}

//
// ─── EXERCISE ─────────────────────────────────────────────────────────────────
//

/// A generated exercise of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exercise {
    FillBlank(FillBlankExercise),
    MultipleChoice(MultipleChoiceExercise),
    ReadingComprehension(ReadingExercise),
    EducationalCard(EducationalCard),
}

impl Exercise {
    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        match self {
            Exercise::FillBlank(_) => ExerciseKind::FillBlank,
            Exercise::MultipleChoice(_) => ExerciseKind::MultipleChoice,
            Exercise::ReadingComprehension(_) => ExerciseKind::ReadingComprehension,
            Exercise::EducationalCard(_) => ExerciseKind::EducationalCard,
        }
    }

    /// # Errors
    ///
    /// Returns the payload's `ShapeError` if it is not displayable.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Exercise::FillBlank(inner) => inner.validate(),
            Exercise::MultipleChoice(inner) => inner.validate(),
            Exercise::ReadingComprehension(inner) => inner.validate(),
            Exercise::EducationalCard(inner) => inner.validate(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
