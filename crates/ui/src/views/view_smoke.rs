use std::sync::Arc;

use malaab_core::model::{Attempt, FillBlankExercise, History, Points};
use malaab_core::time::fixed_now;
use services::ProgressStore;
use storage::Storage;

use super::quiz::QuizAction;
use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_reply};

fn fill_blank(sentence: &str) -> FillBlankExercise {
    FillBlankExercise {
        sentence: sentence.into(),
        options: vec!["يركض".into(), "تركض".into(), "ركض".into(), "راكض".into()],
        answer: "يركض".into(),
        explanation: "الفاعل مذكر.".into(),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_sections_and_points() {
    let storage = Storage::in_memory();
    let store = ProgressStore::new(Arc::clone(&storage.kv));
    store.save_points(Points::new(30)).await;

    let mut harness = setup_view_harness(ViewKind::Dashboard, &storage).await;
    harness.rebuild();
    let html = harness.render();

    for title in [
        "أكمل الفراغ",
        "اختيار من متعدد",
        "فهم المقروء",
        "البطاقات التعليمية",
        "سجل الإجابات",
    ] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("30 نقطة"), "missing points in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_lists_newest_first() {
    let storage = Storage::in_memory();
    let store = ProgressStore::new(Arc::clone(&storage.kv));
    let mut history = History::new();
    history.record(Attempt::new(fill_blank("الأولى ___"), "يركض", fixed_now()).into());
    history.record(Attempt::new(fill_blank("الثانية ___"), "ركض", fixed_now()).into());
    store.save_history(&history).await;

    let mut harness = setup_view_harness(ViewKind::History, &storage).await;
    harness.rebuild();
    let html = harness.render();

    let newest = html.find("الثانية").expect("newest item rendered");
    let oldest = html.find("الأولى").expect("oldest item rendered");
    assert!(newest < oldest, "history not newest first: {html}");
    assert!(html.contains("#2"), "missing item number in {html}");
    assert!(html.contains("الإجابة الصحيحة: يركض"), "missing correction in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_empty_state() {
    let storage = Storage::in_memory();
    let mut harness = setup_view_harness(ViewKind::History, &storage).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("لا توجد إجابات"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exercise_view_smoke_starts_loading() {
    let storage = Storage::in_memory();
    let mut harness = setup_view_harness(ViewKind::MultipleChoice, &storage).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("1 / 25"), "missing counter in {html}");
    assert!(html.contains("سماح تحضّر"), "missing loading text in {html}");
}

const GOAL_QUESTION: &str = "ما مفرد كلمة «أهداف»؟";

fn goal_question_reply() -> String {
    format!(
        r#"{{"question": "{GOAL_QUESTION}", "options": ["هدف", "هداف", "أهدف", "مهدف"], "correct_answer": "هدف", "explanation": "المفرد هدف."}}"#
    )
}

#[tokio::test(flavor = "current_thread")]
async fn picking_the_right_option_awards_points_and_records_history() {
    let storage = Storage::in_memory();
    let mut harness =
        setup_view_harness_with_reply(ViewKind::MultipleChoice, &storage, &goal_question_reply())
            .await;
    harness.rebuild();
    harness
        .settle(|harness| harness.render().contains(GOAL_QUESTION))
        .await;
    assert!(
        harness.render().contains(GOAL_QUESTION),
        "exercise never loaded: {}",
        harness.render()
    );

    harness.dispatch(QuizAction::Select("هدف".into()));
    harness.dispatch(QuizAction::Submit);
    harness
        .settle(|harness| harness.session.points().value() > 0)
        .await;

    let html = harness.render();
    assert!(html.contains("أحسنت"), "missing verdict in {html}");
    assert_eq!(harness.session.points().value(), 10);

    let reloaded = ProgressStore::new(Arc::clone(&storage.kv)).load().await;
    assert_eq!(reloaded.points().value(), 10);
    let answers = reloaded.history().multiple_choice();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].selected_answer(), "هدف");
}
