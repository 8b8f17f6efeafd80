//! Read-aloud toggle for reading passages.
//!
//! The narrator only decides what should happen; the UI runs the
//! resulting `NarrationCommand` against the platform speech engine and
//! reports back through `started`, `ended` and `failed`.

use tracing::debug;

/// Voice language for every utterance.
pub const NARRATION_LANG: &str = "ar-SA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtteranceId(u64);

impl UtteranceId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrationCommand {
    Speak {
        utterance: UtteranceId,
        text: String,
        lang: &'static str,
    },
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NarrationState {
    Idle,
    Requested(UtteranceId),
    Speaking(UtteranceId),
}

#[derive(Debug, Clone)]
pub struct Narrator {
    state: NarrationState,
    issued: u64,
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Narrator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: NarrationState::Idle,
            issued: 0,
        }
    }

    /// Start reading `text`, or stop if something is already being read.
    pub fn toggle(&mut self, text: &str) -> NarrationCommand {
        if self.is_active() {
            debug!("narration cancelled");
            self.state = NarrationState::Idle;
            return NarrationCommand::Cancel;
        }

        self.issued += 1;
        let utterance = UtteranceId(self.issued);
        self.state = NarrationState::Requested(utterance);
        NarrationCommand::Speak {
            utterance,
            text: text.to_owned(),
            lang: NARRATION_LANG,
        }
    }

    pub fn started(&mut self, utterance: UtteranceId) {
        if self.state == NarrationState::Requested(utterance) {
            self.state = NarrationState::Speaking(utterance);
        }
    }

    pub fn ended(&mut self, utterance: UtteranceId) {
        if self.owns(utterance) {
            self.state = NarrationState::Idle;
        }
    }

    pub fn failed(&mut self, utterance: UtteranceId) {
        if self.owns(utterance) {
            debug!(utterance = utterance.value(), "narration failed");
            self.state = NarrationState::Idle;
        }
    }

    /// Stop whatever is playing. Returns the command to run, if any.
    pub fn reset(&mut self) -> Option<NarrationCommand> {
        if self.is_active() {
            self.state = NarrationState::Idle;
            Some(NarrationCommand::Cancel)
        } else {
            None
        }
    }

    /// Requested or speaking.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state != NarrationState::Idle
    }

    #[must_use]
    pub fn is_speaking(&self) -> bool {
        matches!(self.state, NarrationState::Speaking(_))
    }

    fn owns(&self, utterance: UtteranceId) -> bool {
        matches!(
            self.state,
            NarrationState::Requested(id) | NarrationState::Speaking(id) if id == utterance
        )
    }
}
