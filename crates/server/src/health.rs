use airtime_voice::dispatcher::IntentDispatcher;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info};

#[derive(Clone)]
pub struct SkillStatus {
    pub card_title: String,
    pub registered_intents: usize,
}

impl SkillStatus {
    pub fn of(dispatcher: &IntentDispatcher) -> Self {
        Self {
            card_title: dispatcher.card_title().to_owned(),
            registered_intents: dispatcher.registered_intents(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub skill: HealthCheck,
    pub checked_at: String,
}

pub fn router(skill: SkillStatus) -> Router {
    Router::new().route("/health", get(health)).with_state(skill)
}

pub async fn spawn(bind_address: &str, port: u16, skill: SkillStatus) -> std::io::Result<()> {
    let address = format!("{bind_address}:{port}");
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        event_name = "system.health.start",
        bind_address = %address,
        "health endpoint started"
    );

    tokio::spawn(async move {
        if let Err(error) = axum::serve(listener, router(skill)).await {
            error!(
                event_name = "system.health.error",
                error = %error,
                "health endpoint server terminated unexpectedly"
            );
        }
    });

    Ok(())
}

pub async fn health(State(skill): State<SkillStatus>) -> (StatusCode, Json<HealthResponse>) {
    let dispatcher_ready = skill.registered_intents > 0;

    let payload = HealthResponse {
        status: if dispatcher_ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "airtime-server runtime initialized".to_string(),
        },
        skill: HealthCheck {
            status: if dispatcher_ready { "ready" } else { "degraded" },
            detail: format!(
                "dispatcher `{}` serving {} intents",
                skill.card_title, skill.registered_intents
            ),
        },
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code =
        if dispatcher_ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}
