/// Exercises per round for the graded kinds.
pub const TIMED_EXERCISE_LIMIT: u32 = 25;

/// Cards per round for educational cards.
pub const CARD_LIMIT: u32 = 100;

/// Cards up to this number are generated at beginner level.
pub const BEGINNER_CARD_CEILING: u32 = 50;

/// Display-only "exercise N of M" counter that wraps back to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCounter {
    current: u32,
    limit: u32,
}

impl SessionCounter {
    /// A counter over `1..=limit`. A zero limit is treated as 1.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            current: 1,
            limit: limit.max(1),
        }
    }

    #[must_use]
    pub fn timed() -> Self {
        Self::new(TIMED_EXERCISE_LIMIT)
    }

    #[must_use]
    pub fn cards() -> Self {
        Self::new(CARD_LIMIT)
    }

    #[must_use]
    pub fn current(self) -> u32 {
        self.current
    }

    /// Move to the next number, wrapping from `limit` to 1.
    pub fn advance(&mut self) -> u32 {
        self.current = self.current % self.limit + 1;
        self.current
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("{} / {}", self.current, self.limit)
    }
}

/// Difficulty requested for educational cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLevel {
    Beginner,
    Intermediate,
}

impl CardLevel {
    #[must_use]
    pub fn for_card(number: u32) -> Self {
        if number <= BEGINNER_CARD_CEILING {
            CardLevel::Beginner
        } else {
            CardLevel::Intermediate
        }
    }

    /// Arabic label used in prompts and on screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CardLevel::Beginner => "مبتدئ",
            CardLevel::Intermediate => "متوسط",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_counter_wraps_after_twenty_five() {
        let mut counter = SessionCounter::timed();
        for _ in 1..TIMED_EXERCISE_LIMIT {
            counter.advance();
        }
        assert_eq!(counter.current(), 25);
        assert_eq!(counter.advance(), 1);
    }

    #[test]
    fn card_counter_runs_to_one_hundred() {
        let mut counter = SessionCounter::cards();
        assert_eq!(counter.current(), 1);
        for _ in 1..CARD_LIMIT {
            counter.advance();
        }
        assert_eq!(counter.label(), "100 / 100");
        assert_eq!(counter.advance(), 1);
    }

    #[test]
    fn zero_limit_stays_at_one() {
        let mut counter = SessionCounter::new(0);
        assert_eq!(counter.advance(), 1);
    }

    #[test]
    fn level_switches_after_fifty_cards() {
        assert_eq!(CardLevel::for_card(1), CardLevel::Beginner);
        assert_eq!(CardLevel::for_card(50), CardLevel::Beginner);
        assert_eq!(CardLevel::for_card(51), CardLevel::Intermediate);
    }
}
