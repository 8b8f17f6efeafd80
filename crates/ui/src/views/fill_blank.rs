use dioxus::prelude::*;
use malaab_core::model::FillBlankExercise;
use services::QuizPhase;

use super::frame::{ExerciseFrame, FailedPanel, Feedback, LoadingPanel, OptionList};
use super::quiz::{QuizAction, use_quiz_session};
use crate::vm::map_options;

#[component]
pub fn FillBlankView() -> Element {
    let (session, dispatch) = use_quiz_session::<FillBlankExercise>();
    let state = session.read();
    let counter = state.counter().label();

    rsx! {
        ExerciseFrame { title: "أكمل الفراغ", counter,
            match state.phase() {
                QuizPhase::Loading => rsx! {
                    LoadingPanel {}
                },
                QuizPhase::Failed { message } => rsx! {
                    FailedPanel {
                        message: message.clone(),
                        on_retry: move |()| dispatch.call(QuizAction::Retry),
                    }
                },
                QuizPhase::Ready { exercise, .. } | QuizPhase::Answered { exercise, .. } => {
                    let (before, after) = exercise.split_sentence();
                    let blank = state.selected().unwrap_or("______").to_string();
                    let answered = state.is_answered();
                    rsx! {
                        p { class: "sentence",
                            "{before}"
                            span { class: "blank", "{blank}" }
                            "{after}"
                        }
                        OptionList {
                            options: map_options(&state),
                            locked: answered,
                            on_pick: move |option| dispatch.call(QuizAction::Select(option)),
                        }
                        if answered {
                            Feedback {
                                verdict: state.verdict(),
                                correct_answer: exercise.answer.clone(),
                                explanation: exercise.explanation.clone(),
                                on_next: move |()| dispatch.call(QuizAction::Next),
                            }
                        }
                    }
                }
            }
        }
    }
}
