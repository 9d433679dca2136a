use std::collections::HashMap;

use airtime_core::session::SessionState;
use chrono::{DateTime, Utc};

/// One inbound event from the hosting platform, already authenticated and
/// parsed out of the wire envelope. The session snapshot rides along and is
/// echoed back, mutated, in the acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestEnvelope {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub application_id: String,
    pub session: SessionState,
    pub event: SkillEvent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkillEvent {
    SessionStarted,
    Launch,
    Intent(IntentRequest),
    SessionEnded { reason: SessionEndReason },
}

impl SkillEvent {
    pub fn event_type(&self) -> SkillEventType {
        match self {
            Self::SessionStarted => SkillEventType::SessionStarted,
            Self::Launch => SkillEventType::Launch,
            Self::Intent(_) => SkillEventType::Intent,
            Self::SessionEnded { .. } => SkillEventType::SessionEnded,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillEventType {
    SessionStarted,
    Launch,
    Intent,
    SessionEnded,
}

/// An intent with its resolved slot values. The name is optional because the
/// platform can deliver an intent event with no resolvable intent at all;
/// dispatch treats that the same as an unknown name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntentRequest {
    pub name: Option<String>,
    pub slots: HashMap<String, String>,
}

impl IntentRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), slots: HashMap::new() }
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }
}

/// Why the platform closed the session. Informational only; the session-ended
/// hook never produces a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEndReason {
    UserInitiated,
    Error,
    ExceededMaxReprompts,
}

#[cfg(test)]
mod tests {
    use super::{IntentRequest, SessionEndReason, SkillEvent, SkillEventType};

    #[test]
    fn event_types_cover_all_variants() {
        assert_eq!(SkillEvent::SessionStarted.event_type(), SkillEventType::SessionStarted);
        assert_eq!(SkillEvent::Launch.event_type(), SkillEventType::Launch);
        assert_eq!(
            SkillEvent::Intent(IntentRequest::named("TellCreditsIntent")).event_type(),
            SkillEventType::Intent
        );
        assert_eq!(
            SkillEvent::SessionEnded { reason: SessionEndReason::UserInitiated }.event_type(),
            SkillEventType::SessionEnded
        );
    }

    #[test]
    fn slot_lookup_distinguishes_missing_from_empty() {
        let intent = IntentRequest::named("UpBandwidthIntent").with_slot("Bandwidth", "");
        assert_eq!(intent.slot("Bandwidth"), Some(""));
        assert_eq!(intent.slot("Duration"), None);
    }
}
