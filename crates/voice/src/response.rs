use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "PlainText")]
    Plain { text: String },
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } => text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

impl Card {
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Simple { title: title.into(), content: content.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// One turn's response. Ask-mode keeps the session open and carries a
/// reprompt; tell-mode closes the session and carries none. The two
/// constructors are the only way to build one, so a hybrid cannot exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub output_speech: OutputSpeech,
    pub card: Card,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

impl ResponseEnvelope {
    pub fn ask(speech: OutputSpeech, reprompt: Reprompt, card: Card) -> Self {
        Self { output_speech: speech, card, reprompt: Some(reprompt), should_end_session: false }
    }

    pub fn tell(speech: OutputSpeech, card: Card) -> Self {
        Self { output_speech: speech, card, reprompt: None, should_end_session: true }
    }

    pub fn is_ask(&self) -> bool {
        !self.should_end_session && self.reprompt.is_some()
    }

    pub fn is_tell(&self) -> bool {
        self.should_end_session && self.reprompt.is_none()
    }

    pub fn speech_text(&self) -> &str {
        self.output_speech.text()
    }

    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt.as_ref().map(|reprompt| reprompt.output_speech.text())
    }
}

/// Every response carries a card titled after the skill whose content mirrors
/// the spoken text.
pub fn ask_response(card_title: &str, speech_text: &str, reprompt_text: &str) -> ResponseEnvelope {
    ResponseEnvelope::ask(
        OutputSpeech::plain(speech_text),
        Reprompt { output_speech: OutputSpeech::plain(reprompt_text) },
        Card::simple(card_title, speech_text),
    )
}

pub fn tell_response(card_title: &str, speech_text: &str) -> ResponseEnvelope {
    ResponseEnvelope::tell(OutputSpeech::plain(speech_text), Card::simple(card_title, speech_text))
}

#[cfg(test)]
mod tests {
    use super::{ask_response, tell_response, Card};

    #[test]
    fn ask_keeps_the_session_open_with_a_reprompt() {
        let response = ask_response("TestSpeechlet", "What next?", "Still there?");

        assert!(response.is_ask());
        assert!(!response.is_tell());
        assert_eq!(response.speech_text(), "What next?");
        assert_eq!(response.reprompt_text(), Some("Still there?"));
    }

    #[test]
    fn tell_closes_the_session_without_a_reprompt() {
        let response = tell_response("TestSpeechlet", "Goodbye.");

        assert!(response.is_tell());
        assert!(!response.is_ask());
        assert_eq!(response.reprompt_text(), None);
    }

    #[test]
    fn card_mirrors_speech_text() {
        let response = tell_response("TestSpeechlet", "Goodbye.");
        assert_eq!(
            response.card,
            Card::simple("TestSpeechlet", "Goodbye.")
        );
    }

    #[test]
    fn wire_shape_uses_camel_case_and_omits_absent_reprompt() {
        let json = serde_json::to_value(tell_response("TestSpeechlet", "Goodbye."))
            .expect("serialize");

        assert_eq!(json["shouldEndSession"], true);
        assert_eq!(json["outputSpeech"]["type"], "PlainText");
        assert_eq!(json["card"]["type"], "Simple");
        assert!(json.get("reprompt").is_none());
    }
}
