use dioxus::prelude::*;

use crate::routes::use_screen_navigator;
use crate::vm::{OptionVm, verdict_text};

/// Shared chrome for every exercise screen: back button, title, counter.
#[component]
pub fn ExerciseFrame(title: String, counter: Option<String>, children: Element) -> Element {
    let navigator = use_screen_navigator();

    rsx! {
        section { class: "exercise",
            div { class: "exercise-header",
                button {
                    class: "back",
                    onclick: move |_| navigator.back(),
                    "→ العودة"
                }
                h2 { "{title}" }
                if let Some(counter) = counter {
                    span { class: "counter", "{counter}" }
                }
            }
            {children}
        }
    }
}

#[component]
pub fn LoadingPanel() -> Element {
    rsx! {
        p { class: "loading", "سماح تحضّر لك تمرينًا جديدًا..." }
    }
}

#[component]
pub fn FailedPanel(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "failed",
            p { "تعذّر تحضير التمرين." }
            p { class: "failed-detail", "{message}" }
            button { class: "primary", onclick: move |_| on_retry.call(()), "حاول مرة أخرى" }
        }
    }
}

#[component]
pub fn OptionList(options: Vec<OptionVm>, locked: bool, on_pick: EventHandler<String>) -> Element {
    rsx! {
        div { class: "options",
            for (index, option) in options.into_iter().enumerate() {
                button {
                    key: "{index}",
                    class: option.class,
                    disabled: locked,
                    onclick: {
                        let text = option.text.clone();
                        move |_| on_pick.call(text.clone())
                    },
                    "{option.text}"
                }
            }
        }
    }
}

#[component]
pub fn Feedback(
    verdict: Option<bool>,
    correct_answer: String,
    explanation: String,
    on_next: EventHandler<()>,
) -> Element {
    let class = match verdict {
        Some(true) => "feedback feedback--correct",
        Some(false) => "feedback feedback--wrong",
        None => "feedback",
    };

    rsx! {
        div { class,
            p { class: "verdict", "{verdict_text(verdict)}" }
            if verdict != Some(true) {
                p { "الإجابة الصحيحة: {correct_answer}" }
            }
            if !explanation.is_empty() {
                p { class: "explanation", "{explanation}" }
            }
            button { class: "primary", onclick: move |_| on_next.call(()), "التمرين التالي ←" }
        }
    }
}
