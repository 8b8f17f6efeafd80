use malaab_core::model::ExerciseKind;
use malaab_core::screen::Screen;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardEntryVm {
    pub screen: Screen,
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Dashboard tiles, in display order: one per exercise kind, then history.
#[must_use]
pub fn dashboard_entries() -> Vec<DashboardEntryVm> {
    let mut entries: Vec<_> = ExerciseKind::ALL
        .into_iter()
        .map(|kind| {
            let (icon, title, subtitle) = tile_text(kind);
            DashboardEntryVm {
                screen: Screen::for_kind(kind),
                icon,
                title,
                subtitle,
            }
        })
        .collect();
    entries.push(DashboardEntryVm {
        screen: Screen::History,
        icon: "📋",
        title: "سجل الإجابات",
        subtitle: "راجع تمارينك السابقة",
    });
    entries
}

fn tile_text(kind: ExerciseKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        ExerciseKind::FillBlank => (
            "🥅",
            "أكمل الفراغ",
            "اختر الكلمة المناسبة لإكمال الجملة",
        ),
        ExerciseKind::MultipleChoice => ("🏆", "اختيار من متعدد", "أسئلة قواعد بأربعة اختيارات"),
        ExerciseKind::ReadingComprehension => ("📖", "فهم المقروء", "اقرأ الفقرة وأجب عن السؤال"),
        ExerciseKind::EducationalCard => (
            "🃏",
            "البطاقات التعليمية",
            "تعلّم قاعدة جديدة مع مثال",
        ),
    }
}
