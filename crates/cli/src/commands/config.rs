use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use airtime_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "skill.card_title",
        &config.skill.card_title,
        field_source(
            "skill.card_title",
            Some("AIRTIME_SKILL_CARD_TITLE"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "skill.verify_application_id",
        &config.skill.verify_application_id.to_string(),
        field_source(
            "skill.verify_application_id",
            Some("AIRTIME_SKILL_VERIFY_APPLICATION_ID"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "skill.supported_application_ids",
        &config.skill.supported_application_ids.join(","),
        field_source(
            "skill.supported_application_ids",
            Some("AIRTIME_SKILL_SUPPORTED_APPLICATION_IDS"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.push(render_line(
        "server.bind_address",
        &config.server.bind_address,
        field_source(
            "server.bind_address",
            Some("AIRTIME_SERVER_BIND_ADDRESS"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "server.health_check_port",
        &config.server.health_check_port.to_string(),
        field_source(
            "server.health_check_port",
            Some("AIRTIME_SERVER_HEALTH_CHECK_PORT"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "server.graceful_shutdown_secs",
        &config.server.graceful_shutdown_secs.to_string(),
        field_source(
            "server.graceful_shutdown_secs",
            Some("AIRTIME_SERVER_GRACEFUL_SHUTDOWN_SECS"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            "logging.level",
            Some("AIRTIME_LOGGING_LEVEL"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format).to_lowercase(),
        field_source(
            "logging.format",
            Some("AIRTIME_LOGGING_FORMAT"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn render_line(name: &str, value: &str, source: String) -> String {
    format!("  {name} = {value}  [{source}]")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("airtime.toml"), PathBuf::from("config/airtime.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    field_path: &str,
    env_var: Option<&str>,
    doc: Option<&Value>,
    file_path: Option<&Path>,
) -> String {
    if let Some(var) = env_var {
        if env::var(var).map(|value| !value.trim().is_empty()).unwrap_or(false) {
            return format!("env:{var}");
        }
    }

    if let (Some(doc), Some(path)) = (doc, file_path) {
        if field_in_doc(doc, field_path) {
            return format!("file:{}", path.display());
        }
    }

    "default".to_string()
}

fn field_in_doc(doc: &Value, field_path: &str) -> bool {
    let mut current = doc;
    for segment in field_path.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use toml::Value;

    use super::{field_in_doc, field_source, render_line};

    #[test]
    fn nested_fields_are_found_in_the_file_doc() {
        let doc = "[skill]\ncard_title = \"Custom\"\n".parse::<Value>().expect("toml");
        assert!(field_in_doc(&doc, "skill.card_title"));
        assert!(!field_in_doc(&doc, "skill.verify_application_id"));
    }

    #[test]
    fn source_defaults_when_neither_env_nor_file_sets_the_field() {
        assert_eq!(
            field_source("skill.card_title", Some("AIRTIME_TEST_UNSET_VAR"), None, None),
            "default"
        );
    }

    #[test]
    fn rendered_lines_carry_value_and_source() {
        let line = render_line("skill.card_title", "TestSpeechlet", "default".to_string());
        assert_eq!(line, "  skill.card_title = TestSpeechlet  [default]");
    }
}
