use airtime_core::config::SkillConfig;
use airtime_core::errors::DomainError;
use airtime_core::intents::IntentKind;
use airtime_core::session::{SessionState, SessionStore};
use tracing::info;

use crate::handlers;
use crate::requests::{IntentRequest, RequestEnvelope, SessionEndReason, SkillEvent};
use crate::response::ResponseEnvelope;

/// Routes one inbound event to its handler and produces exactly one response
/// envelope per launch/intent turn. The only failure that crosses this
/// boundary is an unrecognized intent; everything else is a normal branch
/// with its own spoken fallback.
#[derive(Clone, Debug)]
pub struct IntentDispatcher {
    card_title: String,
}

impl Default for IntentDispatcher {
    fn default() -> Self {
        Self { card_title: "TestSpeechlet".to_owned() }
    }
}

impl IntentDispatcher {
    pub fn new(card_title: impl Into<String>) -> Self {
        Self { card_title: card_title.into() }
    }

    pub fn from_config(skill: &SkillConfig) -> Self {
        Self::new(skill.card_title.clone())
    }

    pub fn card_title(&self) -> &str {
        &self.card_title
    }

    pub fn registered_intents(&self) -> usize {
        IntentKind::ALL.len()
    }

    pub fn on_session_started(&self, request_id: &str, session: &SessionState) {
        info!(
            event_name = "skill.session_started",
            request_id, session_id = %session.session_id,
            "session started"
        );
    }

    pub fn on_launch(&self, request_id: &str, session: &SessionState) -> ResponseEnvelope {
        info!(
            event_name = "skill.launch",
            request_id, session_id = %session.session_id,
            "launch request"
        );
        handlers::welcome(&self.card_title)
    }

    pub fn on_intent<S: SessionStore>(
        &self,
        request_id: &str,
        intent: &IntentRequest,
        session: &mut S,
    ) -> Result<ResponseEnvelope, DomainError> {
        let kind = IntentKind::resolve(intent.name.as_deref())?;
        info!(
            event_name = "skill.intent",
            request_id,
            intent = kind.wire_name(),
            "intent request"
        );

        Ok(match kind {
            IntentKind::UpBandwidth => {
                handlers::bandwidth::up_bandwidth(&self.card_title, intent, session)
            }
            IntentKind::TellBandwidth => {
                handlers::bandwidth::tell_bandwidth(&self.card_title, session)
            }
            IntentKind::TellCredits => handlers::credits::tell_credits(&self.card_title, session),
            IntentKind::AddCredits => handlers::credits::add_credits(&self.card_title),
            IntentKind::NoAddCredits => handlers::credits::no_add_credits(&self.card_title),
        })
    }

    pub fn on_session_ended(
        &self,
        request_id: &str,
        reason: SessionEndReason,
        session: &SessionState,
    ) {
        info!(
            event_name = "skill.session_ended",
            request_id, session_id = %session.session_id, reason = ?reason,
            "session ended"
        );
    }

    /// Top-level routing for one envelope. Lifecycle notifications mutate
    /// nothing and yield no response.
    pub fn handle(
        &self,
        envelope: &mut RequestEnvelope,
    ) -> Result<Option<ResponseEnvelope>, DomainError> {
        match &envelope.event {
            SkillEvent::SessionStarted => {
                self.on_session_started(&envelope.request_id, &envelope.session);
                Ok(None)
            }
            SkillEvent::Launch => {
                Ok(Some(self.on_launch(&envelope.request_id, &envelope.session)))
            }
            SkillEvent::Intent(intent) => self
                .on_intent(&envelope.request_id, intent, &mut envelope.session)
                .map(Some),
            SkillEvent::SessionEnded { reason } => {
                self.on_session_ended(&envelope.request_id, *reason, &envelope.session);
                Ok(None)
            }
        }
    }
}
