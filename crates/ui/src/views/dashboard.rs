use dioxus::prelude::*;
use malaab_core::model::Points;

use crate::routes::use_screen_navigator;
use crate::vm::dashboard_entries;

#[component]
pub fn DashboardView() -> Element {
    let navigator = use_screen_navigator();
    let points = use_context::<Signal<Points>>();

    rsx! {
        div { class: "page dashboard",
            h2 { "أهلًا بك في الملعب!" }
            p { class: "greeting",
                "أنا المعلمة سماح، لنتدرّب معًا على قواعد اللغة العربية. رصيدك الآن {points().value()} نقطة."
            }
            div { class: "tiles",
                for entry in dashboard_entries() {
                    button {
                        key: "{entry.title}",
                        class: "tile",
                        onclick: move |_| navigator.open(entry.screen),
                        span { class: "tile-icon", "{entry.icon}" }
                        span { class: "tile-title", "{entry.title}" }
                        span { class: "tile-subtitle", "{entry.subtitle}" }
                    }
                }
            }
        }
    }
}
