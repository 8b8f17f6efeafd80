use dioxus::prelude::*;
use malaab_core::model::ExerciseKind;

use super::frame::ExerciseFrame;
use crate::context::AppContext;
use crate::vm::{HistoryItemVm, history_tabs, map_history_items};

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_hook(|| ctx.session().snapshot());
    let mut active = use_signal(|| ExerciseKind::FillBlank);

    let tabs = history_tabs(progress.history());
    let items = map_history_items(progress.history(), active());

    rsx! {
        ExerciseFrame { title: "سجل الإجابات",
            div { class: "tabs",
                for tab in tabs {
                    button {
                        key: "{tab.kind.as_str()}",
                        class: if tab.kind == active() { "tab tab--active" } else { "tab" },
                        onclick: move |_| active.set(tab.kind),
                        "{tab.label} ({tab.count})"
                    }
                }
            }
            if items.is_empty() {
                p { class: "empty", "لا توجد إجابات محفوظة في هذا القسم بعد." }
            } else {
                ol { class: "history",
                    for item in items {
                        HistoryItem { key: "{item.number}", item }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryItem(item: HistoryItemVm) -> Element {
    let class = if item.is_correct {
        "history-item history-item--correct"
    } else {
        "history-item history-item--wrong"
    };

    rsx! {
        li { class,
            div { class: "history-meta",
                span { class: "history-number", "#{item.number}" }
                span { class: "history-date", "{item.answered_at_str}" }
            }
            if let Some(passage) = item.passage.as_ref() {
                p { class: "passage", "{passage}" }
            }
            p { class: "question", "{item.prompt}" }
            p { "إجابتك: {item.selected}" }
            if !item.is_correct {
                p { "الإجابة الصحيحة: {item.correct_answer}" }
            }
            if !item.explanation.is_empty() {
                p { class: "explanation", "{item.explanation}" }
            }
        }
    }
}
