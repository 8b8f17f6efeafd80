use dioxus::prelude::*;
use dioxus_router::{Navigator, Outlet, Routable, use_navigator};
use malaab_core::model::Points;
use malaab_core::screen::{Screen, ViewRouter};
use tracing::warn;

use crate::views::{
    CardsView, DashboardView, FillBlankView, HistoryView, MultipleChoiceView, ReadingView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/fill-blank", FillBlankView)] FillBlank {},
        #[route("/multiple-choice", MultipleChoiceView)] MultipleChoice {},
        #[route("/reading", ReadingView)] Reading {},
        #[route("/cards", CardsView)] Cards {},
        #[route("/history", HistoryView)] History {},
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Dashboard => Route::Dashboard {},
            Screen::FillBlank => Route::FillBlank {},
            Screen::MultipleChoice => Route::MultipleChoice {},
            Screen::ReadingComprehension => Route::Reading {},
            Screen::EducationalCards => Route::Cards {},
            Screen::History => Route::History {},
        }
    }
}

/// Moves between screens through the `ViewRouter`, keeping the URL route
/// in step with it.
#[derive(Clone, Copy)]
pub struct ScreenNavigator {
    router: Signal<ViewRouter>,
    navigator: Navigator,
}

impl ScreenNavigator {
    pub fn open(&self, screen: Screen) {
        let mut router = self.router;
        let selected = router.write().select(screen);
        match selected {
            Ok(screen) => {
                self.navigator.push(Route::from(screen));
            }
            Err(err) => warn!(error = %err, "screen change ignored"),
        }
    }

    pub fn back(&self) {
        let mut router = self.router;
        let screen = router.write().back();
        self.navigator.push(Route::from(screen));
    }
}

pub fn use_screen_navigator() -> ScreenNavigator {
    ScreenNavigator {
        router: use_context::<Signal<ViewRouter>>(),
        navigator: use_navigator(),
    }
}

#[component]
fn Layout() -> Element {
    let points = use_context::<Signal<Points>>();

    rsx! {
        div { class: "app", dir: "rtl", lang: "ar",
            header { class: "topbar",
                h1 { "ملعب العربية" }
                span { class: "points", "⚽ {points().value()} نقطة" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
