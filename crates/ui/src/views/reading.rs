use dioxus::prelude::*;
use malaab_core::model::ReadingExercise;
use services::QuizPhase;

use super::frame::{ExerciseFrame, FailedPanel, Feedback, LoadingPanel, OptionList};
use super::narration::use_narration;
use super::quiz::{QuizAction, use_quiz_session};
use crate::vm::map_options;

#[component]
pub fn ReadingView() -> Element {
    let (session, dispatch) = use_quiz_session::<ReadingExercise>();
    let narration = use_narration();
    let state = session.read();
    let counter = state.counter().label();

    let next = move |()| {
        narration.stop();
        dispatch.call(QuizAction::Next);
    };

    rsx! {
        ExerciseFrame { title: "فهم المقروء", counter,
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
                    let paragraph = exercise.paragraph.clone();
                    let answered = state.is_answered();
                    let narrate_label = if narration.is_active() {
                        "⏹ إيقاف القراءة"
                    } else {
                        "🔊 استمع إلى الفقرة"
                    };
                    let narrate_class = if narration.is_speaking() {
                        "narrate narrate--speaking"
                    } else {
                        "narrate"
                    };
                    rsx! {
                        div { class: "passage",
                            p { "{exercise.paragraph}" }
                            button {
                                class: narrate_class,
                                onclick: move |_| narration.toggle(&paragraph),
                                "{narrate_label}"
                            }
                        }
                        p { class: "question", "{exercise.question}" }
                        OptionList {
                            options: map_options(&state),
                            locked: answered,
                            on_pick: move |option| dispatch.call(QuizAction::Select(option)),
                        }
                        if answered {
                            Feedback {
                                verdict: state.verdict(),
                                correct_answer: exercise.correct_answer.clone(),
                                explanation: exercise.explanation.clone(),
                                on_next: next,
                            }
                        } else {
                            div { class: "actions",
                                button {
                                    class: "primary",
                                    disabled: state.selected().is_none(),
                                    onclick: move |_| dispatch.call(QuizAction::Submit),
                                    "تأكيد الإجابة"
                                }
                                button {
                                    class: "secondary",
                                    onclick: move |_| dispatch.call(QuizAction::Reveal),
                                    "أظهر الإجابة"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
