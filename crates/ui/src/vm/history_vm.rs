use malaab_core::model::{Attempt, ExerciseKind, Graded, History};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryTabVm {
    pub kind: ExerciseKind,
    pub label: &'static str,
    pub count: usize,
}

#[must_use]
pub fn history_tabs(history: &History) -> Vec<HistoryTabVm> {
    [
        (ExerciseKind::FillBlank, "أكمل الفراغ"),
        (ExerciseKind::MultipleChoice, "اختيار من متعدد"),
        (ExerciseKind::ReadingComprehension, "فهم المقروء"),
    ]
    .into_iter()
    .map(|(kind, label)| HistoryTabVm {
        kind,
        label,
        count: history.len_for(kind),
    })
    .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryItemVm {
    /// 1 is the oldest attempt.
    pub number: usize,
    pub passage: Option<String>,
    pub prompt: String,
    pub selected: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
    pub answered_at_str: String,
}

/// Items for one kind, newest first.
#[must_use]
pub fn map_history_items(history: &History, kind: ExerciseKind) -> Vec<HistoryItemVm> {
    match kind {
        ExerciseKind::FillBlank => map_items(history.fill_blank(), |e| {
            (None, e.sentence.clone(), e.explanation.clone())
        }),
        ExerciseKind::MultipleChoice => map_items(history.multiple_choice(), |e| {
            (None, e.question.clone(), e.explanation.clone())
        }),
        ExerciseKind::ReadingComprehension => map_items(history.reading_comprehension(), |e| {
            (
                Some(e.paragraph.clone()),
                e.question.clone(),
                e.explanation.clone(),
            )
        }),
        ExerciseKind::EducationalCard => Vec::new(),
    }
}

fn map_items<E: Graded>(
    attempts: &[Attempt<E>],
    texts: impl Fn(&E) -> (Option<String>, String, String),
) -> Vec<HistoryItemVm> {
    let total = attempts.len();
    attempts
        .iter()
        .enumerate()
        .map(|(index, attempt)| {
            let (passage, prompt, explanation) = texts(attempt.exercise());
            HistoryItemVm {
                number: total - index,
                passage,
                prompt,
                selected: attempt.selected_answer().to_string(),
                correct_answer: attempt.exercise().correct_answer().to_string(),
                is_correct: attempt.is_correct(),
                explanation,
                answered_at_str: format_datetime(attempt.answered_at()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use malaab_core::model::{MultipleChoiceExercise, ReadingExercise};
    use malaab_core::time::fixed_now;

    use super::*;

    fn mcq(question: &str) -> MultipleChoiceExercise {
        MultipleChoiceExercise {
            question: question.into(),
            options: vec!["أ".into(), "ب".into(), "ج".into(), "د".into()],
            correct_answer: "أ".into(),
            explanation: "شرح".into(),
        }
    }

    #[test]
    fn newest_item_carries_the_highest_number() {
        let mut history = History::new();
        history.record(Attempt::new(mcq("الأول"), "أ", fixed_now()).into());
        history.record(Attempt::new(mcq("الثاني"), "ب", fixed_now()).into());

        let items = map_history_items(&history, ExerciseKind::MultipleChoice);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].number, 2);
        assert_eq!(items[0].prompt, "الثاني");
        assert!(!items[0].is_correct);
        assert_eq!(items[1].number, 1);
        assert!(items[1].is_correct);
        assert_eq!(items[1].correct_answer, "أ");
    }

    #[test]
    fn reading_items_keep_the_passage() {
        let mut history = History::new();
        let reading = ReadingExercise {
            paragraph: "الفقرة".into(),
            question: "السؤال".into(),
            options: vec!["أ".into(), "ب".into(), "ج".into(), "د".into()],
            correct_answer: "ب".into(),
            explanation: String::new(),
        };
        history.record(Attempt::new(reading, "ب", fixed_now()).into());

        let items = map_history_items(&history, ExerciseKind::ReadingComprehension);
        assert_eq!(items[0].passage.as_deref(), Some("الفقرة"));
        assert!(map_history_items(&history, ExerciseKind::FillBlank).is_empty());
    }

    #[test]
    fn tabs_count_per_kind() {
        let mut history = History::new();
        history.record(Attempt::new(mcq("س"), "أ", fixed_now()).into());
        let tabs = history_tabs(&history);
        assert_eq!(tabs.len(), 3);
        let mcq_tab = tabs
            .iter()
            .find(|t| t.kind == ExerciseKind::MultipleChoice)
            .unwrap();
        assert_eq!(mcq_tab.count, 1);
    }
}
