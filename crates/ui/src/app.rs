use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::use_shared_state_provider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_shared_state_provider();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "ملعب العربية" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "حدث خطأ غير متوقع" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
