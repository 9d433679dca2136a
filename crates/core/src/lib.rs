pub mod config;
pub mod errors;
pub mod intents;
pub mod session;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions};
pub use errors::{DomainError, InterfaceError};
pub use intents::{IntentKind, BANDWIDTH_SLOT, DURATION_SLOT};
pub use session::{
    SessionState, SessionStore, BANDWIDTH_KEY, CREDITS_KEY, DURATION_KEY, PURCHASE_CREDIT_GRANT,
};
