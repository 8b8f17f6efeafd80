use dioxus::prelude::*;
use malaab_core::model::MultipleChoiceExercise;
use services::QuizPhase;

use super::frame::{ExerciseFrame, FailedPanel, Feedback, LoadingPanel, OptionList};
use super::quiz::{QuizAction, use_quiz_session};
use crate::vm::map_options;

#[component]
pub fn MultipleChoiceView() -> Element {
    let (session, dispatch) = use_quiz_session::<MultipleChoiceExercise>();
    let state = session.read();
    let counter = state.counter().label();

    rsx! {
        ExerciseFrame { title: "اختيار من متعدد", counter,
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
                QuizPhase::Ready { exercise, selected } => rsx! {
                    p { class: "question", "{exercise.question}" }
                    OptionList {
                        options: map_options(&state),
                        locked: false,
                        on_pick: move |option| dispatch.call(QuizAction::Select(option)),
                    }
                    button {
                        class: "primary",
                        disabled: selected.is_none(),
                        onclick: move |_| dispatch.call(QuizAction::Submit),
                        "تأكيد الإجابة"
                    }
                },
                QuizPhase::Answered { exercise, .. } => rsx! {
                    p { class: "question", "{exercise.question}" }
                    OptionList {
                        options: map_options(&state),
                        locked: true,
                        on_pick: move |_| {},
                    }
                    Feedback {
                        verdict: state.verdict(),
                        correct_answer: exercise.correct_answer.clone(),
                        explanation: exercise.explanation.clone(),
                        on_next: move |()| dispatch.call(QuizAction::Next),
                    }
                },
            }
        }
    }
}
