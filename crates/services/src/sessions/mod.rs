//! Controllers for the exercise screens.
//!
//! They hold no reference to the generator or the store: the UI issues a
//! fetch, hands the result back with its ticket, and forwards any
//! `AttemptRecord` to the `SessionContext`.

mod cards;
mod quiz;
mod ticket;

pub use cards::{CardPhase, CardSession};
pub use quiz::{
    FillBlankSession, MultipleChoiceSession, OptionTone, QuizExercise, QuizPhase, QuizSession,
    ReadingSession, shuffle_options,
};
pub use ticket::{FetchOutcome, RequestSequence, RequestTicket};
