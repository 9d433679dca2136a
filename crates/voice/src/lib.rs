//! Voice interface - the platform-facing side of the skill
//!
//! This crate receives typed request envelopes from the hosting voice
//! platform and turns them into response envelopes:
//! - **Requests** (`requests`) - session-started, launch, intent, and
//!   session-ended events with slot values already resolved
//! - **Responses** (`response`) - spoken output, reprompts, and display cards
//! - **Dispatch** (`dispatcher`) - routes each event to its handler
//! - **Transport** (`transport`) - event loop pumping envelopes from the
//!   platform and acknowledging them with responses
//!
//! # Architecture
//!
//! ```text
//! Platform events → EventLoopRunner → IntentDispatcher → Handlers
//!                        ↓
//!            Acknowledgement (response + session attributes)
//! ```
//!
//! # Key Types
//!
//! - `EventLoopRunner` - transport pump with reconnection logic
//! - `IntentDispatcher` - routes events to the five intent handlers
//! - `ResponseEnvelope` - pure-ask or pure-tell spoken/visual response

pub mod dispatcher;
pub mod handlers;
pub mod requests;
pub mod response;
pub mod transport;
