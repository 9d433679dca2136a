use airtime_core::session::{SessionStore, PURCHASE_CREDIT_GRANT};

use crate::response::{ask_response, ResponseEnvelope};

const PURCHASE_PROMPT_SPEECH: &str =
    "You dont have any movie credits available. Would you like to purchase 5 credits for $12.99?";
const CREDITS_ADDED_SPEECH: &str = "Ok. You now have 5 credits";
const DECLINED_SPEECH: &str = "As you wish";

/// Report the balance. An empty balance flips to the purchase grant as a side
/// effect of offering it, so the follow-up turn reads back five credits.
pub fn tell_credits<S: SessionStore>(card_title: &str, session: &mut S) -> ResponseEnvelope {
    let credits = session.credits();
    if credits == 0 {
        session.set_credits(PURCHASE_CREDIT_GRANT);
        ask_response(card_title, PURCHASE_PROMPT_SPEECH, PURCHASE_PROMPT_SPEECH)
    } else {
        let speech = format!("You have is {credits} movie credits available");
        ask_response(card_title, &speech, &speech)
    }
}

/// Confirms the purchase in speech only. The stored balance is left alone;
/// `tell_credits` is the one place that grants.
pub fn add_credits(card_title: &str) -> ResponseEnvelope {
    ask_response(card_title, CREDITS_ADDED_SPEECH, CREDITS_ADDED_SPEECH)
}

pub fn no_add_credits(card_title: &str) -> ResponseEnvelope {
    ask_response(card_title, DECLINED_SPEECH, DECLINED_SPEECH)
}

#[cfg(test)]
mod tests {
    use airtime_core::session::{SessionState, SessionStore};

    use super::{add_credits, no_add_credits, tell_credits};

    const TITLE: &str = "TestSpeechlet";

    #[test]
    fn empty_balance_offers_a_purchase_and_grants_five() {
        let mut session = SessionState::new("sess-1");

        let response = tell_credits(TITLE, &mut session);

        assert!(response.is_ask());
        assert!(response.speech_text().contains("purchase 5 credits for $12.99"));
        assert_eq!(session.credits(), 5);
    }

    #[test]
    fn second_ask_reads_the_balance_back_unchanged() {
        let mut session = SessionState::new("sess-2");
        tell_credits(TITLE, &mut session);

        let response = tell_credits(TITLE, &mut session);

        assert!(response.is_ask());
        assert_eq!(response.speech_text(), "You have is 5 movie credits available");
        assert_eq!(session.credits(), 5);
    }

    #[test]
    fn balances_do_not_leak_between_sessions() {
        let mut first = SessionState::new("sess-3");
        let mut second = SessionState::new("sess-4");
        tell_credits(TITLE, &mut first);

        let response = tell_credits(TITLE, &mut second);

        assert!(response.speech_text().contains("dont have any movie credits"));
        assert_eq!(second.credits(), 5);
        assert_eq!(first.credits(), 5);
    }

    #[test]
    fn add_credits_speaks_but_does_not_grant() {
        // The handler takes no session; a fresh session stays at zero even
        // after the confirmation line is spoken.
        let session = SessionState::new("sess-5");
        let response = add_credits(TITLE);

        assert!(response.is_ask());
        assert_eq!(response.speech_text(), "Ok. You now have 5 credits");
        assert_eq!(session.credits(), 0);
    }

    #[test]
    fn declining_is_a_fixed_ask() {
        let response = no_add_credits(TITLE);

        assert!(response.is_ask());
        assert_eq!(response.speech_text(), "As you wish");
        assert_eq!(response.reprompt_text(), Some("As you wish"));
    }
}
