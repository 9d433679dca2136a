use std::collections::HashMap;
use std::{sync::Arc, time::Duration};

use airtime_core::config::SkillConfig;
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::dispatcher::IntentDispatcher;
use crate::requests::RequestEnvelope;
use crate::response::ResponseEnvelope;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("transport failed to connect: {0}")]
    Connect(String),
    #[error("transport read failed: {0}")]
    Receive(String),
    #[error("transport ack failed: {0}")]
    Acknowledge(String),
    #[error("transport disconnect failed: {0}")]
    Disconnect(String),
}

/// What goes back to the platform for one request: the response envelope (if
/// the turn produced one) and the session attributes to persist for the next
/// turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Acknowledgement {
    pub response: Option<ResponseEnvelope>,
    pub session_attributes: HashMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self { max_retries: 5, base_delay_ms: 250, max_delay_ms: 5_000 }
    }
}

impl ReconnectPolicy {
    fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.min(16);
        let multiplier = 1_u64 << exponent;
        let delay_ms = self.base_delay_ms.saturating_mul(multiplier).min(self.max_delay_ms);
        Duration::from_millis(delay_ms)
    }
}

/// Boundary with the host platform. The platform side authenticates requests,
/// parses wire envelopes into typed ones, and persists acknowledged session
/// attributes between turns.
#[async_trait]
pub trait EventTransport: Send + Sync {
    async fn connect(&self) -> Result<(), TransportError>;
    async fn next_envelope(&self) -> Result<Option<RequestEnvelope>, TransportError>;
    async fn acknowledge(
        &self,
        request_id: &str,
        ack: Acknowledgement,
    ) -> Result<(), TransportError>;
    async fn disconnect(&self) -> Result<(), TransportError>;
}

#[derive(Default)]
pub struct NoopEventTransport;

#[async_trait]
impl EventTransport for NoopEventTransport {
    async fn connect(&self) -> Result<(), TransportError> {
        Ok(())
    }

    async fn next_envelope(&self) -> Result<Option<RequestEnvelope>, TransportError> {
        Ok(None)
    }

    async fn acknowledge(
        &self,
        _request_id: &str,
        _ack: Acknowledgement,
    ) -> Result<(), TransportError> {
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), TransportError> {
        Ok(())
    }
}

pub struct EventLoopRunner {
    transport: Arc<dyn EventTransport>,
    dispatcher: IntentDispatcher,
    reconnect_policy: ReconnectPolicy,
    verify_application_id: bool,
    supported_application_ids: Vec<String>,
}

impl Default for EventLoopRunner {
    fn default() -> Self {
        Self {
            transport: Arc::new(NoopEventTransport),
            dispatcher: IntentDispatcher::default(),
            reconnect_policy: ReconnectPolicy::default(),
            verify_application_id: false,
            supported_application_ids: Vec::new(),
        }
    }
}

impl EventLoopRunner {
    pub fn new(
        transport: Arc<dyn EventTransport>,
        dispatcher: IntentDispatcher,
        reconnect_policy: ReconnectPolicy,
    ) -> Self {
        Self {
            transport,
            dispatcher,
            reconnect_policy,
            verify_application_id: false,
            supported_application_ids: Vec::new(),
        }
    }

    pub fn with_application_id_gate(mut self, skill: &SkillConfig) -> Self {
        self.verify_application_id = skill.verify_application_id;
        self.supported_application_ids = skill.supported_application_ids.clone();
        self
    }

    pub fn dispatcher(&self) -> &IntentDispatcher {
        &self.dispatcher
    }

    pub async fn start(&self) -> Result<()> {
        for attempt in 0..=self.reconnect_policy.max_retries {
            match self.connect_and_pump(attempt).await {
                Ok(()) => return Ok(()),
                Err(transport_error) => {
                    warn!(
                        attempt,
                        max_retries = self.reconnect_policy.max_retries,
                        error = %transport_error,
                        "event transport failed"
                    );

                    if attempt == self.reconnect_policy.max_retries {
                        return Err(transport_error.into());
                    }

                    tokio::time::sleep(self.reconnect_policy.backoff(attempt)).await;
                }
            }
        }

        Ok(())
    }

    async fn connect_and_pump(&self, attempt: u32) -> Result<(), TransportError> {
        self.transport.connect().await?;
        info!(attempt, "event transport connected");

        while let Some(envelope) = self.transport.next_envelope().await? {
            self.process(envelope).await?;
        }

        self.transport.disconnect().await?;
        info!("event transport drained, disconnecting");
        Ok(())
    }

    /// One request in, one acknowledgement out. A dispatch failure is
    /// acknowledged without a response so the platform renders its generic
    /// failure; the pump keeps going.
    async fn process(&self, mut envelope: RequestEnvelope) -> Result<(), TransportError> {
        let request_id = envelope.request_id.clone();

        if self.rejects_application_id(&envelope.application_id) {
            warn!(
                request_id = %request_id,
                application_id = %envelope.application_id,
                "request rejected: unsupported application id"
            );
            let ack = Acknowledgement {
                response: None,
                session_attributes: envelope.session.attributes,
            };
            return self.transport.acknowledge(&request_id, ack).await;
        }

        let response = match self.dispatcher.handle(&mut envelope) {
            Ok(response) => response,
            Err(error) => {
                let interface = error.into_interface(request_id.clone());
                warn!(
                    request_id = %request_id,
                    error = %interface,
                    user_message = interface.user_message(),
                    "dispatch failed"
                );
                None
            }
        };

        debug!(
            request_id = %request_id,
            responded = response.is_some(),
            "request processed"
        );

        let ack =
            Acknowledgement { response, session_attributes: envelope.session.attributes };
        self.transport.acknowledge(&request_id, ack).await
    }

    fn rejects_application_id(&self, application_id: &str) -> bool {
        self.verify_application_id
            && !self.supported_application_ids.iter().any(|id| id == application_id)
    }
}
