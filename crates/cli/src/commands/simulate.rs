use std::collections::HashMap;

use airtime_core::config::{AppConfig, LoadOptions};
use airtime_core::session::SessionState;
use airtime_voice::dispatcher::IntentDispatcher;
use airtime_voice::requests::{IntentRequest, RequestEnvelope, SessionEndReason, SkillEvent};
use airtime_voice::response::ResponseEnvelope;
use chrono::Utc;
use clap::{Args, ValueEnum};
use serde::Serialize;
use uuid::Uuid;

use super::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SimulatedEvent {
    SessionStarted,
    Launch,
    Intent,
    SessionEnded,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    #[arg(long, value_enum, default_value = "launch", help = "Event kind to deliver")]
    pub event: SimulatedEvent,
    #[arg(long, help = "Intent name, e.g. TellCreditsIntent (used with --event intent)")]
    pub intent: Option<String>,
    #[arg(long = "slot", value_parser = parse_key_value, help = "Slot as name=value; repeatable")]
    pub slots: Vec<(String, String)>,
    #[arg(
        long = "attr",
        value_parser = parse_key_value,
        help = "Pre-seeded session attribute as key=value; repeatable"
    )]
    pub attributes: Vec<(String, String)>,
    #[arg(long, default_value = "simulated-session", help = "Session id for the conversation")]
    pub session_id: String,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    request_id: String,
    event: String,
    mode: Option<&'static str>,
    response: Option<ResponseEnvelope>,
    session_attributes: HashMap<String, String>,
}

pub fn run(args: SimulateArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("simulate", "config", error.to_string(), 2);
        }
    };

    let dispatcher = IntentDispatcher::from_config(&config.skill);
    let mut session = SessionState::new(&args.session_id);
    session.is_new = matches!(args.event, SimulatedEvent::SessionStarted | SimulatedEvent::Launch);
    session.attributes = args.attributes.iter().cloned().collect();

    let event = match args.event {
        SimulatedEvent::SessionStarted => SkillEvent::SessionStarted,
        SimulatedEvent::Launch => SkillEvent::Launch,
        SimulatedEvent::Intent => SkillEvent::Intent(IntentRequest {
            name: args.intent.clone(),
            slots: args.slots.iter().cloned().collect(),
        }),
        SimulatedEvent::SessionEnded => {
            SkillEvent::SessionEnded { reason: SessionEndReason::UserInitiated }
        }
    };
    let event_label = format!("{:?}", event.event_type());

    let mut envelope = RequestEnvelope {
        request_id: format!("simulated-{}", Uuid::new_v4()),
        timestamp: Utc::now(),
        application_id: "simulated-application".to_string(),
        session,
        event,
    };

    match dispatcher.handle(&mut envelope) {
        Ok(response) => {
            let report = SimulationReport {
                request_id: envelope.request_id,
                event: event_label,
                mode: response.as_ref().map(|response| {
                    if response.is_ask() {
                        "ask"
                    } else {
                        "tell"
                    }
                }),
                response,
                session_attributes: envelope.session.attributes,
            };

            match serde_json::to_string_pretty(&report) {
                Ok(output) => CommandResult { exit_code: 0, output },
                Err(error) => {
                    CommandResult::failure("simulate", "serialization", error.to_string(), 2)
                }
            }
        }
        Err(error) => CommandResult::failure("simulate", "unrecognized_intent", error.to_string(), 1),
    }
}
