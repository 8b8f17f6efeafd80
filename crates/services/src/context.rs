use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use malaab_core::Clock;
use malaab_core::model::{AttemptRecord, Points, Progress, RecordOutcome};
use tokio::sync::Mutex as AsyncMutex;

use crate::progress::ProgressStore;

/// The student's points and history for this run of the app.
///
/// Owned by the composition root and handed to each screen. Every change
/// is written through the `ProgressStore` before `record` returns, and
/// records are applied and written one at a time.
#[derive(Clone)]
pub struct SessionContext {
    progress: Arc<Mutex<Progress>>,
    writes: Arc<AsyncMutex<()>>,
    store: ProgressStore,
    clock: Clock,
}

impl SessionContext {
    /// Load persisted progress once.
    pub async fn load(store: ProgressStore, clock: Clock) -> Self {
        let progress = store.load().await;
        Self::new(progress, store, clock)
    }

    #[must_use]
    pub fn new(progress: Progress, store: ProgressStore, clock: Clock) -> Self {
        Self {
            progress: Arc::new(Mutex::new(progress)),
            writes: Arc::new(AsyncMutex::new(())),
            store,
            clock,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn points(&self) -> Points {
        self.lock().points()
    }

    #[must_use]
    pub fn snapshot(&self) -> Progress {
        self.lock().clone()
    }

    /// Apply an attempt, then persist what changed.
    pub async fn record(&self, record: AttemptRecord) -> RecordOutcome {
        let _writing = self.writes.lock().await;
        let (outcome, points, history) = {
            let mut progress = self.lock();
            let outcome = progress.record(record);
            (outcome, progress.points(), progress.history().clone())
        };

        if outcome.awarded > 0 {
            self.store.save_points(points).await;
        }
        self.store.save_history(&history).await;
        outcome
    }

    fn lock(&self) -> MutexGuard<'_, Progress> {
        self.progress.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use malaab_core::model::{
        Attempt, MultipleChoiceExercise, POINTS_PER_CORRECT, ReadingExercise,
    };
    use malaab_core::time::fixed_now;
    use storage::{InMemoryStore, KeyValueStore, StorageError};

    use super::*;
    use crate::progress::HISTORY_KEY;

    /// Delays the first history write so a later write could overtake it.
    struct SlowFirstHistoryWrite {
        inner: InMemoryStore,
        delayed: AtomicBool,
    }

    #[async_trait]
    impl KeyValueStore for SlowFirstHistoryWrite {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == HISTORY_KEY && !self.delayed.swap(true, Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            self.inner.set(key, value).await
        }
    }

    fn mcq() -> MultipleChoiceExercise {
        MultipleChoiceExercise {
            question: "ما المفرد من «أهداف»؟".into(),
            options: vec!["هدف".into(), "هداف".into(), "أهدف".into(), "مهدف".into()],
            correct_answer: "هدف".into(),
            explanation: String::new(),
        }
    }

    async fn context() -> SessionContext {
        let store = ProgressStore::new(Arc::new(InMemoryStore::new()));
        SessionContext::load(store, Clock::fixed(fixed_now())).await
    }

    #[tokio::test]
    async fn correct_answer_is_awarded_and_persisted() {
        let kv = InMemoryStore::new();
        let store = ProgressStore::new(Arc::new(kv.clone()));
        let ctx = SessionContext::load(store.clone(), Clock::fixed(fixed_now())).await;

        let outcome = ctx
            .record(Attempt::new(mcq(), "هدف", ctx.clock().now()).into())
            .await;

        assert!(outcome.correct);
        assert_eq!(ctx.points().value(), POINTS_PER_CORRECT);

        let reloaded = store.load().await;
        assert_eq!(reloaded.points().value(), POINTS_PER_CORRECT);
        assert_eq!(reloaded.history().multiple_choice()[0].selected_answer(), "هدف");
    }

    #[tokio::test]
    async fn wrong_answer_keeps_points() {
        let ctx = context().await;
        let outcome = ctx
            .record(Attempt::new(mcq(), "هداف", fixed_now()).into())
            .await;

        assert!(!outcome.correct);
        assert_eq!(ctx.points().value(), 0);
        assert_eq!(ctx.snapshot().history().total(), 1);
    }

    #[tokio::test]
    async fn clones_share_progress() {
        let ctx = context().await;
        let other = ctx.clone();
        let reading = ReadingExercise {
            paragraph: "ركض اللاعب بسرعة.".into(),
            question: "كيف ركض اللاعب؟".into(),
            options: vec!["بسرعة".into(), "ببطء".into(), "لم يركض".into(), "مشى".into()],
            correct_answer: "بسرعة".into(),
            explanation: String::new(),
        };
        ctx.record(Attempt::new(reading, "بسرعة", fixed_now()).into())
            .await;

        assert_eq!(other.points().value(), POINTS_PER_CORRECT);
        assert_eq!(other.snapshot().history().reading_comprehension().len(), 1);
    }

    #[tokio::test]
    async fn overlapping_records_are_all_persisted() {
        let kv = InMemoryStore::new();
        let slow = SlowFirstHistoryWrite {
            inner: kv.clone(),
            delayed: AtomicBool::new(false),
        };
        let ctx = SessionContext::load(
            ProgressStore::new(Arc::new(slow)),
            Clock::fixed(fixed_now()),
        )
        .await;

        tokio::join!(
            ctx.record(Attempt::new(mcq(), "هدف", fixed_now()).into()),
            ctx.record(Attempt::new(mcq(), "هداف", fixed_now()).into()),
        );

        assert_eq!(ctx.snapshot().history().total(), 2);
        let reloaded = ProgressStore::new(Arc::new(kv)).load().await;
        assert_eq!(reloaded.history().total(), 2);
        assert_eq!(reloaded.points().value(), POINTS_PER_CORRECT);
    }
}
