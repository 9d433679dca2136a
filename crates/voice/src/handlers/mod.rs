pub mod bandwidth;
pub mod credits;

use crate::response::{ask_response, ResponseEnvelope};

const WELCOME_SPEECH: &str = "Welcome to the Alexa Skills Kit sample.";
const WELCOME_REPROMPT: &str =
    "Please tell me your favorite color by saying, my favorite color is red";

/// Launch response. Always ask-mode, regardless of session content.
pub fn welcome(card_title: &str) -> ResponseEnvelope {
    ask_response(card_title, WELCOME_SPEECH, WELCOME_REPROMPT)
}
