use malaab_core::model::{CardLevel, EducationalCard, SessionCounter};

use super::ticket::{FetchOutcome, RequestSequence, RequestTicket};
use crate::error::GenerationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardPhase {
    Loading,
    Failed { message: String },
    Ready(EducationalCard),
}

/// State machine behind the educational cards screen. Cards are never
/// graded, so the only action is moving to the next one.
#[derive(Debug, Clone)]
pub struct CardSession {
    phase: CardPhase,
    counter: SessionCounter,
    requests: RequestSequence,
}

impl Default for CardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: CardPhase::Loading,
            counter: SessionCounter::cards(),
            requests: RequestSequence::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> &CardPhase {
        &self.phase
    }

    #[must_use]
    pub fn counter(&self) -> SessionCounter {
        self.counter
    }

    /// Difficulty to request for the current card.
    #[must_use]
    pub fn level(&self) -> CardLevel {
        CardLevel::for_card(self.counter.current())
    }

    #[must_use]
    pub fn card(&self) -> Option<&EducationalCard> {
        match &self.phase {
            CardPhase::Ready(card) => Some(card),
            CardPhase::Loading | CardPhase::Failed { .. } => None,
        }
    }

    pub fn begin_fetch(&mut self) -> RequestTicket {
        self.phase = CardPhase::Loading;
        self.requests.issue()
    }

    pub fn finish_fetch(
        &mut self,
        ticket: RequestTicket,
        result: Result<EducationalCard, GenerationError>,
    ) -> FetchOutcome {
        if !self.requests.is_current(ticket) || self.phase != CardPhase::Loading {
            return FetchOutcome::Stale;
        }

        self.phase = match result {
            Ok(card) => CardPhase::Ready(card),
            Err(err) => CardPhase::Failed {
                message: err.to_string(),
            },
        };
        FetchOutcome::Applied
    }

    pub fn next(&mut self) -> Option<RequestTicket> {
        if self.card().is_none() {
            return None;
        }
        self.counter.advance();
        Some(self.begin_fetch())
    }

    pub fn retry(&mut self) -> Option<RequestTicket> {
        if !matches!(self.phase, CardPhase::Failed { .. }) {
            return None;
        }
        Some(self.begin_fetch())
    }
}

#[cfg(test)]
mod tests {
    use malaab_core::model::{BEGINNER_CARD_CEILING, CARD_LIMIT};

    use super::*;

    fn card() -> EducationalCard {
        EducationalCard {
            concept: "الفاعل".into(),
            explanation: "من قام بالفعل، ويكون مرفوعًا.".into(),
            example: "سجّل اللاعبُ هدفًا.".into(),
        }
    }

    fn show_next(session: &mut CardSession) {
        let ticket = session.next().unwrap();
        session.finish_fetch(ticket, Ok(card()));
    }

    #[test]
    fn loading_then_ready_then_loading() {
        let mut session = CardSession::new();
        let ticket = session.begin_fetch();
        assert!(session.next().is_none());

        session.finish_fetch(ticket, Ok(card()));
        assert_eq!(session.card(), Some(&card()));

        session.next();
        assert_eq!(session.phase(), &CardPhase::Loading);
        assert_eq!(session.counter().current(), 2);
    }

    #[test]
    fn level_follows_the_counter() {
        let mut session = CardSession::new();
        let ticket = session.begin_fetch();
        session.finish_fetch(ticket, Ok(card()));
        assert_eq!(session.level(), CardLevel::Beginner);

        while session.counter().current() < BEGINNER_CARD_CEILING {
            show_next(&mut session);
        }
        assert_eq!(session.level(), CardLevel::Beginner);

        show_next(&mut session);
        assert_eq!(session.level(), CardLevel::Intermediate);
    }

    #[test]
    fn counter_wraps_at_the_card_limit() {
        let mut session = CardSession::new();
        let ticket = session.begin_fetch();
        session.finish_fetch(ticket, Ok(card()));
        for _ in 0..CARD_LIMIT {
            show_next(&mut session);
        }
        assert_eq!(session.counter().current(), 1);
        assert_eq!(session.level(), CardLevel::Beginner);
    }

    #[test]
    fn stale_card_is_dropped() {
        let mut session = CardSession::new();
        let old = session.begin_fetch();
        let _new = session.begin_fetch();
        assert_eq!(session.finish_fetch(old, Ok(card())), FetchOutcome::Stale);
        assert!(session.card().is_none());
    }

    #[test]
    fn failure_is_retryable() {
        let mut session = CardSession::new();
        let ticket = session.begin_fetch();
        session.finish_fetch(ticket, Err(GenerationError::EmptyResponse));
        assert!(matches!(session.phase(), CardPhase::Failed { .. }));

        let retry = session.retry().unwrap();
        session.finish_fetch(retry, Ok(card()));
        assert_eq!(session.counter().current(), 1);
        assert!(session.card().is_some());
    }
}
