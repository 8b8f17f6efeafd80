use dioxus::document::eval;
use dioxus::prelude::*;
use serde::Deserialize;
use services::{NarrationCommand, Narrator};
use tracing::debug;

const CANCEL_NARRATION_SCRIPT: &str = "window.speechSynthesis && window.speechSynthesis.cancel();";

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum NarrationEvent {
    Start,
    End,
    Error,
}

fn speak_script(text: &str, lang: &str) -> String {
    format!(
        r#"(function() {{
            const synth = window.speechSynthesis;
            if (!synth) {{
                dioxus.send("error");
                return;
            }}
            synth.cancel();
            const utterance = new SpeechSynthesisUtterance({text:?});
            utterance.lang = {lang:?};
            utterance.onstart = () => dioxus.send("start");
            utterance.onend = () => dioxus.send("end");
            utterance.onerror = () => dioxus.send("error");
            synth.speak(utterance);
        }})();"#,
    )
}

/// Read-aloud controls for one screen. Speech stops when the screen unmounts.
#[derive(Clone, Copy)]
pub(crate) struct NarrationControls {
    narrator: Signal<Narrator>,
}

impl NarrationControls {
    pub fn toggle(&self, text: &str) {
        let mut narrator = self.narrator;
        let command = narrator.write().toggle(text);
        self.run(command);
    }

    pub fn stop(&self) {
        let mut narrator = self.narrator;
        let command = narrator.write().reset();
        if let Some(command) = command {
            self.run(command);
        }
    }

    pub fn is_active(&self) -> bool {
        self.narrator.read().is_active()
    }

    pub fn is_speaking(&self) -> bool {
        self.narrator.read().is_speaking()
    }

    fn run(&self, command: NarrationCommand) {
        match command {
            NarrationCommand::Cancel => {
                let _ = eval(CANCEL_NARRATION_SCRIPT);
            }
            NarrationCommand::Speak {
                utterance,
                text,
                lang,
            } => {
                let mut narrator = self.narrator;
                let mut channel = eval(&speak_script(&text, lang));
                spawn(async move {
                    while let Ok(event) = channel.recv::<NarrationEvent>().await {
                        match event {
                            NarrationEvent::Start => narrator.write().started(utterance),
                            NarrationEvent::End => {
                                narrator.write().ended(utterance);
                                break;
                            }
                            NarrationEvent::Error => {
                                narrator.write().failed(utterance);
                                break;
                            }
                        }
                    }
                    debug!(utterance = utterance.value(), "narration channel closed");
                });
            }
        }
    }
}

pub(crate) fn use_narration() -> NarrationControls {
    let narrator = use_signal(Narrator::new);
    use_drop(|| {
        let _ = eval(CANCEL_NARRATION_SCRIPT);
    });
    NarrationControls { narrator }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speak_script_sets_language_and_escapes_text() {
        let script = speak_script("قال \"المدرب\"", "ar-SA");
        assert!(script.contains(r#"utterance.lang = "ar-SA";"#));
        assert!(script.contains(r#"\"المدرب\""#));
    }
}
