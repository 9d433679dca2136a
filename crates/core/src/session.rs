use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const BANDWIDTH_KEY: &str = "BANDWIDTH";
pub const DURATION_KEY: &str = "DURATION";
pub const CREDITS_KEY: &str = "CREDITS";

/// Credits granted when the purchase prompt fires on an empty balance.
pub const PURCHASE_CREDIT_GRANT: u64 = 5;

/// Capability handed to intent handlers. The host platform owns the session's
/// lifetime; handlers only read and write string attributes through this seam.
pub trait SessionStore {
    fn attribute(&self, key: &str) -> Option<&str>;
    fn set_attribute(&mut self, key: &str, value: impl Into<String>);

    /// Attribute present and non-empty. An empty string counts as absent.
    fn has_attribute(&self, key: &str) -> bool {
        self.attribute(key).is_some_and(|value| !value.is_empty())
    }

    /// Movie-credit balance for this conversation. Absent, empty, or
    /// unparseable values read as zero.
    fn credits(&self) -> u64 {
        self.attribute(CREDITS_KEY).and_then(|value| value.parse().ok()).unwrap_or(0)
    }

    fn set_credits(&mut self, credits: u64) {
        self.set_attribute(CREDITS_KEY, credits.to_string());
    }
}

/// One conversation's attribute snapshot, round-tripped per request. The
/// platform persists the attribute map between turns and replays it into the
/// next request envelope; this process never stores it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: String,
    pub is_new: bool,
    pub attributes: HashMap<String, String>,
}

impl SessionState {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self { session_id: session_id.into(), is_new: true, attributes: HashMap::new() }
    }

    pub fn with_attributes(
        session_id: impl Into<String>,
        attributes: HashMap<String, String>,
    ) -> Self {
        Self { session_id: session_id.into(), is_new: false, attributes }
    }
}

impl SessionStore for SessionState {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        self.attributes.insert(key.to_owned(), value.into());
    }
}
