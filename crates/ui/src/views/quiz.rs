use dioxus::prelude::*;
use malaab_core::model::Points;
use services::{QuizExercise, QuizSession, RequestTicket};
use tracing::warn;

use crate::context::{AppContext, record_attempt};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum QuizAction {
    Select(String),
    Submit,
    Reveal,
    Next,
    Retry,
}

/// Mount a `QuizSession`, start its first fetch and return the action
/// dispatcher. Records are written through the `SessionContext`.
pub(crate) fn use_quiz_session<E>() -> (Signal<QuizSession<E>>, Callback<QuizAction>)
where
    E: QuizExercise + 'static,
{
    let ctx = use_context::<AppContext>();
    let points = use_context::<Signal<Points>>();
    let mut session = use_signal(QuizSession::<E>::new);

    let fetch = {
        let ctx = ctx.clone();
        use_callback(move |ticket: RequestTicket| {
            let generator = ctx.generator();
            spawn(async move {
                let result = generator.generate_payload::<E>(None).await;
                if let Err(err) = &result {
                    warn!(kind = E::KIND.as_str(), error = %err, "exercise generation failed");
                }
                session.write().finish_fetch(ticket, result);
            });
        })
    };

    use_effect(move || {
        let ticket = session.write().begin_fetch();
        fetch.call(ticket);
    });

    let dispatch = use_callback(move |action: QuizAction| {
        let session_ctx = ctx.session();
        let now = session_ctx.clock().now();
        let record = match action {
            QuizAction::Select(option) => session.write().select(&option, now),
            QuizAction::Submit => session.write().submit(now),
            QuizAction::Reveal => {
                session.write().reveal();
                None
            }
            QuizAction::Next => {
                let ticket = session.write().next();
                if let Some(ticket) = ticket {
                    fetch.call(ticket);
                }
                None
            }
            QuizAction::Retry => {
                let ticket = session.write().retry();
                if let Some(ticket) = ticket {
                    fetch.call(ticket);
                }
                None
            }
        };

        if let Some(record) = record {
            spawn(async move {
                record_attempt(&session_ctx, points, record).await;
            });
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    (session, dispatch)
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<QuizAction>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    fn register(&self, dispatch: Callback<QuizAction>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizAction> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
