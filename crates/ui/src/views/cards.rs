use dioxus::prelude::*;
use malaab_core::model::EducationalCard;
use services::{CardPhase, CardSession, RequestTicket};
use tracing::warn;

use super::frame::{ExerciseFrame, FailedPanel, LoadingPanel};
use crate::context::AppContext;

#[component]
pub fn CardsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(CardSession::new);

    let fetch = use_callback(move |ticket: RequestTicket| {
        let generator = ctx.generator();
        let level = session.peek().level();
        spawn(async move {
            let result = generator
                .generate_payload::<EducationalCard>(Some(level))
                .await;
            if let Err(err) = &result {
                warn!(error = %err, "card generation failed");
            }
            session.write().finish_fetch(ticket, result);
        });
    });

    use_effect(move || {
        let ticket = session.write().begin_fetch();
        fetch.call(ticket);
    });

    let on_next = move |_: MouseEvent| {
        let ticket = session.write().next();
        if let Some(ticket) = ticket {
            fetch.call(ticket);
        }
    };
    let on_retry = move |()| {
        let ticket = session.write().retry();
        if let Some(ticket) = ticket {
            fetch.call(ticket);
        }
    };

    let state = session.read();
    let counter = state.counter().label();
    let level = state.level().label();

    rsx! {
        ExerciseFrame { title: "البطاقات التعليمية", counter,
            p { class: "level", "المستوى: {level}" }
            match state.phase() {
                CardPhase::Loading => rsx! {
                    LoadingPanel {}
                },
                CardPhase::Failed { message } => rsx! {
                    FailedPanel { message: message.clone(), on_retry }
                },
                CardPhase::Ready(card) => rsx! {
                    article { class: "card",
                        h3 { "{card.concept}" }
                        p { "{card.explanation}" }
                        p { class: "example", "مثال: {card.example}" }
                    }
                    button { class: "primary", onclick: on_next, "البطاقة التالية ←" }
                },
            }
        }
    }
}
