use std::sync::Arc;

use malaab_core::Clock;
use storage::Storage;
use tracing::info;

use crate::context::SessionContext;
use crate::error::AppServicesError;
use crate::generator::{ContentGenerator, GeneratorConfig};
use crate::progress::ProgressStore;

/// Everything the screens need, wired once at startup.
#[derive(Clone)]
pub struct AppServices {
    generator: Arc<ContentGenerator>,
    session: SessionContext,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP generator.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened.
    pub async fn new_sqlite(
        db_url: &str,
        config: GeneratorConfig,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        info!(model = %config.model, "content generator configured");
        let generator = ContentGenerator::from_config(config);
        Ok(Self::with_storage(&storage, generator, clock).await)
    }

    /// Build services over an already opened storage.
    pub async fn with_storage(storage: &Storage, generator: ContentGenerator, clock: Clock) -> Self {
        let store = ProgressStore::new(Arc::clone(&storage.kv));
        let session = SessionContext::load(store, clock).await;
        info!(
            points = session.points().value(),
            answered = session.snapshot().history().total(),
            "progress loaded"
        );

        Self {
            generator: Arc::new(generator),
            session,
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
