use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use malaab_core::time::fixed_now;
use services::{
    Clock, ContentBackend, ContentGenerator, GenerationError, GenerationRequest, ProgressStore,
    SessionContext,
};
use storage::Storage;

use super::quiz::{QuizAction, QuizTestHandles};
use crate::context::{UiApp, build_app_context, use_shared_state_provider};
use crate::views::{DashboardView, HistoryView, MultipleChoiceView};

/// Never answers, so exercise screens stay in their loading phase.
struct PendingBackend;

#[async_trait]
impl ContentBackend for PendingBackend {
    async fn complete(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        std::future::pending().await
    }
}

/// Answers every request with the same payload.
struct CannedBackend {
    reply: String,
}

#[async_trait]
impl ContentBackend for CannedBackend {
    async fn complete(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Ok(self.reply.clone())
    }
}

#[derive(Clone)]
struct TestApp {
    generator: Arc<ContentGenerator>,
    session: SessionContext,
}

impl UiApp for TestApp {
    fn generator(&self) -> Arc<ContentGenerator> {
        Arc::clone(&self.generator)
    }

    fn session(&self) -> SessionContext {
        self.session.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    History,
    MultipleChoice,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_shared_state_provider();
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::History => rsx! { HistoryView {} },
        ViewKind::MultipleChoice => rsx! { MultipleChoiceView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session: SessionContext,
    quiz: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive spawned work until `done` holds or the attempts run out.
    pub async fn settle(&mut self, mut done: impl FnMut(&Self) -> bool) {
        for _ in 0..20 {
            if done(self) {
                return;
            }
            self.drive_async().await;
        }
    }

    /// Send an action through the mounted exercise screen's dispatcher.
    pub(crate) fn dispatch(&mut self, action: QuizAction) {
        let dispatch = self.quiz.dispatch();
        self.dom.in_runtime(|| dispatch.call(action));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a harness whose progress is loaded from `storage`. Exercise
/// screens stay in their loading phase.
pub async fn setup_view_harness(view: ViewKind, storage: &Storage) -> ViewHarness {
    build_harness(view, storage, Arc::new(PendingBackend)).await
}

/// Like [`setup_view_harness`], but every generation request returns `reply`.
pub async fn setup_view_harness_with_reply(
    view: ViewKind,
    storage: &Storage,
    reply: &str,
) -> ViewHarness {
    let backend = CannedBackend {
        reply: reply.to_owned(),
    };
    build_harness(view, storage, Arc::new(backend)).await
}

async fn build_harness(
    view: ViewKind,
    storage: &Storage,
    backend: Arc<dyn ContentBackend>,
) -> ViewHarness {
    let generator = Arc::new(ContentGenerator::new(backend, "test-model"));
    let store = ProgressStore::new(Arc::clone(&storage.kv));
    let session = SessionContext::load(store, Clock::fixed(fixed_now())).await;

    let app = Arc::new(TestApp {
        generator,
        session: session.clone(),
    });
    let quiz = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz: quiz.clone(),
        },
    );

    ViewHarness { dom, session, quiz }
}
