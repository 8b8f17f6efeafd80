use chrono::{DateTime, Utc};
use malaab_core::model::{
    Attempt, AttemptRecord, FillBlankExercise, Graded, MultipleChoiceExercise, ReadingExercise,
    SessionCounter,
};
use rand::Rng;
use rand::seq::SliceRandom;

use super::ticket::{FetchOutcome, RequestSequence, RequestTicket};
use crate::error::GenerationError;

/// Per-kind behaviour of a graded exercise screen.
pub trait QuizExercise: Graded + Clone {
    /// Picking an option also submits it.
    const SUBMIT_ON_SELECT: bool;
    /// The answer can be shown without submitting.
    const REVEALABLE: bool;

    fn into_record(attempt: Attempt<Self>) -> AttemptRecord;

    /// Last step before the exercise is shown.
    #[must_use]
    fn prepare_for_display(self) -> Self {
        self
    }
}

impl QuizExercise for FillBlankExercise {
    const SUBMIT_ON_SELECT: bool = true;
    const REVEALABLE: bool = false;

    fn into_record(attempt: Attempt<Self>) -> AttemptRecord {
        attempt.into()
    }

    fn prepare_for_display(mut self) -> Self {
        shuffle_options(&mut self.options, &mut rand::rng());
        self
    }
}

impl QuizExercise for MultipleChoiceExercise {
    const SUBMIT_ON_SELECT: bool = false;
    const REVEALABLE: bool = false;

    fn into_record(attempt: Attempt<Self>) -> AttemptRecord {
        attempt.into()
    }
}

impl QuizExercise for ReadingExercise {
    const SUBMIT_ON_SELECT: bool = false;
    const REVEALABLE: bool = true;

    fn into_record(attempt: Attempt<Self>) -> AttemptRecord {
        attempt.into()
    }
}

/// Shuffle option order in place. Membership is unchanged.
pub fn shuffle_options<R: Rng + ?Sized>(options: &mut [String], rng: &mut R) {
    options.shuffle(rng);
}

/// How an option button should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionTone {
    Neutral,
    Selected,
    Correct,
    Wrong,
    Dimmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase<E> {
    Loading,
    Failed { message: String },
    Ready { exercise: E, selected: Option<String> },
    /// `selected` is `None` when the answer was revealed.
    Answered { exercise: E, selected: Option<String> },
}

/// State machine behind one graded exercise screen.
///
/// `Loading → Ready → Answered → Loading`, with `Failed` reachable from
/// `Loading` and left through `retry`.
#[derive(Debug, Clone)]
pub struct QuizSession<E> {
    phase: QuizPhase<E>,
    counter: SessionCounter,
    requests: RequestSequence,
}

pub type FillBlankSession = QuizSession<FillBlankExercise>;
pub type MultipleChoiceSession = QuizSession<MultipleChoiceExercise>;
pub type ReadingSession = QuizSession<ReadingExercise>;

impl<E: QuizExercise> Default for QuizSession<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: QuizExercise> QuizSession<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::Loading,
            counter: SessionCounter::timed(),
            requests: RequestSequence::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase<E> {
        &self.phase
    }

    #[must_use]
    pub fn counter(&self) -> SessionCounter {
        self.counter
    }

    #[must_use]
    pub fn exercise(&self) -> Option<&E> {
        match &self.phase {
            QuizPhase::Ready { exercise, .. } | QuizPhase::Answered { exercise, .. } => {
                Some(exercise)
            }
            QuizPhase::Loading | QuizPhase::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match &self.phase {
            QuizPhase::Ready { selected, .. } | QuizPhase::Answered { selected, .. } => {
                selected.as_deref()
            }
            QuizPhase::Loading | QuizPhase::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self.phase, QuizPhase::Answered { .. })
    }

    /// Enter `Loading` and issue the ticket the result must carry.
    pub fn begin_fetch(&mut self) -> RequestTicket {
        self.phase = QuizPhase::Loading;
        self.requests.issue()
    }

    /// Apply a generation result if `ticket` is still the newest request.
    pub fn finish_fetch(
        &mut self,
        ticket: RequestTicket,
        result: Result<E, GenerationError>,
    ) -> FetchOutcome {
        if !self.requests.is_current(ticket) || !matches!(self.phase, QuizPhase::Loading) {
            return FetchOutcome::Stale;
        }

        self.phase = match result {
            Ok(exercise) => QuizPhase::Ready {
                exercise: exercise.prepare_for_display(),
                selected: None,
            },
            Err(err) => QuizPhase::Failed {
                message: err.to_string(),
            },
        };
        FetchOutcome::Applied
    }

    /// Pick an option. Kinds that submit on select return their record here.
    ///
    /// Options that are not part of the exercise are ignored.
    pub fn select(&mut self, option: &str, answered_at: DateTime<Utc>) -> Option<AttemptRecord> {
        let QuizPhase::Ready { exercise, selected } = &mut self.phase else {
            return None;
        };
        if !exercise.options().iter().any(|o| o == option) {
            return None;
        }
        *selected = Some(option.to_owned());

        if E::SUBMIT_ON_SELECT {
            self.submit(answered_at)
        } else {
            None
        }
    }

    /// Lock in the current selection.
    ///
    /// Returns the single record for this exercise, or `None` when there is
    /// nothing to submit (no selection, or already answered).
    pub fn submit(&mut self, answered_at: DateTime<Utc>) -> Option<AttemptRecord> {
        let QuizPhase::Ready {
            exercise,
            selected: Some(choice),
        } = &self.phase
        else {
            return None;
        };

        let record = E::into_record(Attempt::new(exercise.clone(), choice.clone(), answered_at));
        let phase = std::mem::replace(&mut self.phase, QuizPhase::Loading);
        if let QuizPhase::Ready { exercise, selected } = phase {
            self.phase = QuizPhase::Answered { exercise, selected };
        }
        Some(record)
    }

    /// Show the answer without grading. Only for revealable kinds.
    pub fn reveal(&mut self) -> bool {
        if !E::REVEALABLE {
            return false;
        }
        let phase = std::mem::replace(&mut self.phase, QuizPhase::Loading);
        match phase {
            QuizPhase::Ready { exercise, .. } => {
                self.phase = QuizPhase::Answered {
                    exercise,
                    selected: None,
                };
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Move on after answering: advance the counter and fetch again.
    pub fn next(&mut self) -> Option<RequestTicket> {
        if !self.is_answered() {
            return None;
        }
        self.counter.advance();
        Some(self.begin_fetch())
    }

    /// Fetch again after a failure. The counter does not move.
    pub fn retry(&mut self) -> Option<RequestTicket> {
        if !matches!(self.phase, QuizPhase::Failed { .. }) {
            return None;
        }
        Some(self.begin_fetch())
    }

    #[must_use]
    pub fn option_tone(&self, option: &str) -> OptionTone {
        match &self.phase {
            QuizPhase::Ready { selected, .. } => {
                if selected.as_deref() == Some(option) {
                    OptionTone::Selected
                } else {
                    OptionTone::Neutral
                }
            }
            QuizPhase::Answered { exercise, selected } => {
                if exercise.is_correct(option) {
                    OptionTone::Correct
                } else if selected.as_deref() == Some(option) {
                    OptionTone::Wrong
                } else {
                    OptionTone::Dimmed
                }
            }
            QuizPhase::Loading | QuizPhase::Failed { .. } => OptionTone::Neutral,
        }
    }

    /// Whether the submitted answer was right. `None` until answered, and
    /// for revealed answers.
    #[must_use]
    pub fn verdict(&self) -> Option<bool> {
        match &self.phase {
            QuizPhase::Answered {
                exercise,
                selected: Some(choice),
            } => Some(exercise.is_correct(choice)),
            _ => None,
        }
    }
}
