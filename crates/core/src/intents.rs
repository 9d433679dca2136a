use crate::errors::DomainError;

pub const BANDWIDTH_SLOT: &str = "Bandwidth";
pub const DURATION_SLOT: &str = "Duration";

/// The closed set of intents this skill understands. Wire names resolve by
/// exact match only; anything else is an unrecognized intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntentKind {
    UpBandwidth,
    TellBandwidth,
    TellCredits,
    AddCredits,
    NoAddCredits,
}

impl IntentKind {
    pub const ALL: [IntentKind; 5] = [
        IntentKind::UpBandwidth,
        IntentKind::TellBandwidth,
        IntentKind::TellCredits,
        IntentKind::AddCredits,
        IntentKind::NoAddCredits,
    ];

    pub fn resolve(name: Option<&str>) -> Result<Self, DomainError> {
        match name {
            Some("UpBandwidthIntent") => Ok(Self::UpBandwidth),
            Some("TellBandwidthIntent") => Ok(Self::TellBandwidth),
            Some("TellCreditsIntent") => Ok(Self::TellCredits),
            Some("AddCreditsIntent") => Ok(Self::AddCredits),
            Some("NoAddCreditsIntent") => Ok(Self::NoAddCredits),
            other => Err(DomainError::UnrecognizedIntent { name: other.map(str::to_owned) }),
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::UpBandwidth => "UpBandwidthIntent",
            Self::TellBandwidth => "TellBandwidthIntent",
            Self::TellCredits => "TellCreditsIntent",
            Self::AddCredits => "AddCreditsIntent",
            Self::NoAddCredits => "NoAddCreditsIntent",
        }
    }
}
