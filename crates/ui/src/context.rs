use std::sync::Arc;

use dioxus::prelude::*;
use malaab_core::model::{AttemptRecord, Points, RecordOutcome};
use malaab_core::screen::ViewRouter;
use services::{ContentGenerator, SessionContext};

pub trait UiApp: Send + Sync {
    fn generator(&self) -> Arc<ContentGenerator>;
    fn session(&self) -> SessionContext;
}

#[derive(Clone)]
pub struct AppContext {
    generator: Arc<ContentGenerator>,
    session: SessionContext,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            generator: app.generator(),
            session: app.session(),
        }
    }

    #[must_use]
    pub fn generator(&self) -> Arc<ContentGenerator> {
        Arc::clone(&self.generator)
    }

    #[must_use]
    pub fn session(&self) -> SessionContext {
        self.session.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Provide the reactive state every screen shares: the view router and
/// the points shown in the header. Call once, below the `AppContext`.
pub fn use_shared_state_provider() {
    let ctx = use_context::<AppContext>();
    use_context_provider(|| Signal::new(ViewRouter::new()));
    use_context_provider(|| Signal::new(ctx.session().points()));
}

/// Record an attempt and refresh the points on screen.
pub async fn record_attempt(
    session: &SessionContext,
    mut points: Signal<Points>,
    record: AttemptRecord,
) -> RecordOutcome {
    let outcome = session.record(record).await;
    points.set(session.points());
    outcome
}
