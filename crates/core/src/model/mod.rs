mod attempt;
mod counter;
mod exercise;
mod history;
mod progress;

pub use attempt::{Attempt, AttemptRecord};
pub use counter::{
    BEGINNER_CARD_CEILING, CARD_LIMIT, CardLevel, SessionCounter, TIMED_EXERCISE_LIMIT,
};
pub use exercise::{
    BLANK_PLACEHOLDER, EducationalCard, Exercise, ExerciseKind, ExercisePayload,
    FillBlankExercise, Graded, MultipleChoiceExercise, OPTION_COUNT, ReadingExercise, ShapeError,
};
pub use history::History;
pub use progress::{POINTS_PER_CORRECT, Points, Progress, RecordOutcome};
