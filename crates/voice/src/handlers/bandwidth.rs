use airtime_core::intents::{BANDWIDTH_SLOT, DURATION_SLOT};
use airtime_core::session::{SessionStore, BANDWIDTH_KEY, DURATION_KEY};

use crate::requests::IntentRequest;
use crate::response::{ask_response, tell_response, ResponseEnvelope};

const SLOTS_MISSING_SPEECH: &str = "I do not understand you, please try again";
const BOOKING_UNKNOWN_SPEECH: &str = "I'm not sure what about your bandwidth is.";

/// Book bandwidth for a duration. Both slots must be present; values are
/// stored verbatim, so an empty-but-present value books an empty string.
pub fn up_bandwidth<S: SessionStore>(
    card_title: &str,
    intent: &IntentRequest,
    session: &mut S,
) -> ResponseEnvelope {
    let (Some(bandwidth), Some(duration)) =
        (intent.slot(BANDWIDTH_SLOT), intent.slot(DURATION_SLOT))
    else {
        return ask_response(card_title, SLOTS_MISSING_SPEECH, SLOTS_MISSING_SPEECH);
    };

    let speech =
        format!("Your booked bandwidth is {bandwidth} and booked duration {duration}");
    session.set_attribute(BANDWIDTH_KEY, bandwidth);
    session.set_attribute(DURATION_KEY, duration);
    ask_response(card_title, &speech, &speech)
}

/// Read the booking back. Only closes the session when a real booking exists;
/// empty stored values count as no booking.
pub fn tell_bandwidth<S: SessionStore>(card_title: &str, session: &S) -> ResponseEnvelope {
    if session.has_attribute(BANDWIDTH_KEY) && session.has_attribute(DURATION_KEY) {
        let bandwidth = session.attribute(BANDWIDTH_KEY).unwrap_or_default();
        let duration = session.attribute(DURATION_KEY).unwrap_or_default();
        let speech =
            format!("Your bandwidth is {bandwidth} bandwidth for the next {duration}. Goodbye.");
        tell_response(card_title, &speech)
    } else {
        ask_response(card_title, BOOKING_UNKNOWN_SPEECH, BOOKING_UNKNOWN_SPEECH)
    }
}

#[cfg(test)]
mod tests {
    use airtime_core::session::{SessionState, SessionStore, BANDWIDTH_KEY, DURATION_KEY};

    use super::{tell_bandwidth, up_bandwidth};
    use crate::requests::IntentRequest;

    const TITLE: &str = "TestSpeechlet";

    fn booking_intent() -> IntentRequest {
        IntentRequest::named("UpBandwidthIntent")
            .with_slot("Bandwidth", "5Mbps")
            .with_slot("Duration", "2 hours")
    }

    #[test]
    fn booking_stores_both_attributes_and_reads_them_back() {
        let mut session = SessionState::new("sess-1");

        let response = up_bandwidth(TITLE, &booking_intent(), &mut session);

        assert!(response.is_ask());
        assert_eq!(
            response.speech_text(),
            "Your booked bandwidth is 5Mbps and booked duration 2 hours"
        );
        assert_eq!(response.reprompt_text(), Some(response.speech_text()));
        assert_eq!(session.attribute(BANDWIDTH_KEY), Some("5Mbps"));
        assert_eq!(session.attribute(DURATION_KEY), Some("2 hours"));
    }

    #[test]
    fn missing_duration_slot_leaves_session_unchanged() {
        let mut session = SessionState::new("sess-2");
        let intent = IntentRequest::named("UpBandwidthIntent").with_slot("Bandwidth", "5Mbps");

        let response = up_bandwidth(TITLE, &intent, &mut session);

        assert!(response.is_ask());
        assert_eq!(response.speech_text(), "I do not understand you, please try again");
        assert_eq!(response.reprompt_text(), Some("I do not understand you, please try again"));
        assert_eq!(session.attribute(BANDWIDTH_KEY), None);
        assert_eq!(session.attribute(DURATION_KEY), None);
    }

    #[test]
    fn empty_slot_values_are_accepted_and_stored() {
        let mut session = SessionState::new("sess-3");
        let intent = IntentRequest::named("UpBandwidthIntent")
            .with_slot("Bandwidth", "")
            .with_slot("Duration", "");

        let response = up_bandwidth(TITLE, &intent, &mut session);

        assert!(response.is_ask());
        assert_eq!(response.speech_text(), "Your booked bandwidth is  and booked duration ");
        assert_eq!(session.attribute(BANDWIDTH_KEY), Some(""));
    }

    #[test]
    fn telling_without_a_booking_stays_open() {
        let session = SessionState::new("sess-4");

        let response = tell_bandwidth(TITLE, &session);

        assert!(response.is_ask());
        assert_eq!(response.speech_text(), "I'm not sure what about your bandwidth is.");
    }

    #[test]
    fn telling_after_a_booking_says_goodbye_and_closes() {
        let mut session = SessionState::new("sess-5");
        up_bandwidth(TITLE, &booking_intent(), &mut session);

        let response = tell_bandwidth(TITLE, &session);

        assert!(response.is_tell());
        assert_eq!(
            response.speech_text(),
            "Your bandwidth is 5Mbps bandwidth for the next 2 hours. Goodbye."
        );
    }

    #[test]
    fn empty_stored_booking_counts_as_no_booking() {
        let mut session = SessionState::new("sess-6");
        session.set_attribute(BANDWIDTH_KEY, "");
        session.set_attribute(DURATION_KEY, "2 hours");

        let response = tell_bandwidth(TITLE, &session);

        assert!(response.is_ask());
        assert_eq!(response.speech_text(), "I'm not sure what about your bandwidth is.");
    }
}
