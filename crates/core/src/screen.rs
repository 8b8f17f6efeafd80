use thiserror::Error;

use crate::model::ExerciseKind;

/// Top-level screens. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Dashboard,
    FillBlank,
    MultipleChoice,
    ReadingComprehension,
    EducationalCards,
    History,
}

impl Screen {
    /// The screen that practices `kind`.
    #[must_use]
    pub fn for_kind(kind: ExerciseKind) -> Self {
        match kind {
            ExerciseKind::FillBlank => Screen::FillBlank,
            ExerciseKind::MultipleChoice => Screen::MultipleChoice,
            ExerciseKind::ReadingComprehension => Screen::ReadingComprehension,
            ExerciseKind::EducationalCard => Screen::EducationalCards,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RouteError {
    #[error("screens can only be selected from the dashboard (current: {current:?})")]
    NotOnDashboard { current: Screen },
}

/// Single-level navigation: dashboard → screen → back to dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRouter {
    current: Screen,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Screen::Dashboard,
        }
    }

    #[must_use]
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Mount `screen`. Only allowed while the dashboard is showing.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::NotOnDashboard` from any other screen.
    pub fn select(&mut self, screen: Screen) -> Result<Screen, RouteError> {
        if self.current != Screen::Dashboard {
            return Err(RouteError::NotOnDashboard {
                current: self.current,
            });
        }
        self.current = screen;
        Ok(screen)
    }

    /// Return to the dashboard from wherever we are.
    pub fn back(&mut self) -> Screen {
        self.current = Screen::Dashboard;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(ViewRouter::new().current(), Screen::Dashboard);
    }

    #[test]
    fn select_then_back() {
        let mut router = ViewRouter::new();
        assert_eq!(router.select(Screen::History), Ok(Screen::History));
        assert_eq!(router.current(), Screen::History);
        assert_eq!(router.back(), Screen::Dashboard);
    }

    #[test]
    fn cannot_jump_between_screens() {
        let mut router = ViewRouter::new();
        router.select(Screen::FillBlank).unwrap();
        assert_eq!(
            router.select(Screen::MultipleChoice),
            Err(RouteError::NotOnDashboard {
                current: Screen::FillBlank
            })
        );
        assert_eq!(router.current(), Screen::FillBlank);
    }

    #[test]
    fn back_on_dashboard_is_a_no_op() {
        let mut router = ViewRouter::new();
        assert_eq!(router.back(), Screen::Dashboard);
    }

    #[test]
    fn each_kind_has_its_own_screen() {
        let screens: std::collections::HashSet<_> =
            ExerciseKind::ALL.into_iter().map(Screen::for_kind).collect();
        assert_eq!(screens.len(), ExerciseKind::ALL.len());
        assert!(!screens.contains(&Screen::Dashboard));
        assert!(!screens.contains(&Screen::History));
    }
}
