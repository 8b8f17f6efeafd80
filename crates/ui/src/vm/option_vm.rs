use services::{OptionTone, QuizExercise, QuizSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub class: &'static str,
}

#[must_use]
pub fn map_options<E: QuizExercise>(session: &QuizSession<E>) -> Vec<OptionVm> {
    session
        .exercise()
        .map(|exercise| {
            exercise
                .options()
                .iter()
                .map(|text| OptionVm {
                    text: text.clone(),
                    class: option_class(session.option_tone(text)),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[must_use]
pub fn option_class(tone: OptionTone) -> &'static str {
    match tone {
        OptionTone::Neutral => "option",
        OptionTone::Selected => "option option--selected",
        OptionTone::Correct => "option option--correct",
        OptionTone::Wrong => "option option--wrong",
        OptionTone::Dimmed => "option option--dimmed",
    }
}

/// Feedback line shown once an exercise is answered.
#[must_use]
pub fn verdict_text(verdict: Option<bool>) -> &'static str {
    match verdict {
        Some(true) => "أحسنت! إجابة صحيحة ⚽",
        Some(false) => "إجابة خاطئة، حاول مرة أخرى في التمرين القادم",
        None => "هذه هي الإجابة الصحيحة",
    }
}

#[cfg(test)]
mod tests {
    use malaab_core::model::MultipleChoiceExercise;
    use malaab_core::time::fixed_now;
    use services::MultipleChoiceSession;

    use super::*;

    #[test]
    fn options_follow_session_tones() {
        let mut session = MultipleChoiceSession::new();
        let ticket = session.begin_fetch();
        session.finish_fetch(
            ticket,
            Ok(MultipleChoiceExercise {
                question: "س".into(),
                options: vec!["أ".into(), "ب".into(), "ج".into(), "د".into()],
                correct_answer: "أ".into(),
                explanation: String::new(),
            }),
        );
        session.select("ب", fixed_now());
        session.submit(fixed_now());

        let options = map_options(&session);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].class, option_class(OptionTone::Correct));
        assert_eq!(options[1].class, option_class(OptionTone::Wrong));
        assert_eq!(options[2].class, option_class(OptionTone::Dimmed));
    }

    #[test]
    fn no_options_while_loading() {
        assert!(map_options(&MultipleChoiceSession::new()).is_empty());
    }

    #[test]
    fn correct_and_wrong_are_distinct() {
        assert_ne!(
            option_class(OptionTone::Correct),
            option_class(OptionTone::Wrong)
        );
    }
}
