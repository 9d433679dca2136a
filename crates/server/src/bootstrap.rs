use airtime_core::config::{AppConfig, ConfigError, LoadOptions};
use airtime_voice::dispatcher::IntentDispatcher;
use airtime_voice::transport::{EventLoopRunner, NoopEventTransport, ReconnectPolicy};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub runner: EventLoopRunner,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let dispatcher = IntentDispatcher::from_config(&config.skill);
    let runner = EventLoopRunner::new(
        Arc::new(NoopEventTransport),
        dispatcher,
        ReconnectPolicy::default(),
    )
    .with_application_id_gate(&config.skill);

    info!(
        event_name = "system.bootstrap.dispatcher_ready",
        registered_intents = runner.dispatcher().registered_intents(),
        "intent dispatcher wired"
    );

    Ok(Application { config, runner })
}

#[cfg(test)]
mod tests {
    use airtime_core::config::{ConfigOverrides, LoadOptions};

    use crate::bootstrap::bootstrap;

    #[test]
    fn bootstrap_fails_fast_on_invalid_configuration() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                verify_application_id: Some(true),
                supported_application_ids: Some(Vec::new()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        });

        let message = result.err().expect("gate without ids must fail").to_string();
        assert!(message.contains("supported_application_ids"));
    }

    #[test]
    fn bootstrap_wires_all_five_intents() {
        let app = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                card_title: Some("BandwidthDesk".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .expect("bootstrap should succeed with defaults");

        assert_eq!(app.runner.dispatcher().registered_intents(), 5);
        assert_eq!(app.runner.dispatcher().card_title(), "BandwidthDesk");
    }
}
