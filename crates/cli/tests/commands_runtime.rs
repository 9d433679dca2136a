use airtime_cli::commands::{config, doctor, simulate};

#[test]
fn config_command_renders_every_section_with_sources() {
    let output = config::run();

    assert!(output.starts_with("effective config"));
    assert!(output.contains("skill.card_title"));
    assert!(output.contains("server.health_check_port"));
    assert!(output.contains("logging.level"));
    assert!(output.contains("[default]") || output.contains("[env:") || output.contains("[file:"));
}

#[test]
fn doctor_human_output_lists_all_checks() {
    let output = doctor::run(false);

    assert!(output.contains("config_validation"));
    assert!(output.contains("dispatcher_wiring"));
    assert!(output.contains("launch_response"));
}

#[test]
fn simulate_covers_a_full_credits_exchange() {
    let turn_one = simulate::SimulateArgs {
        event: simulate::SimulatedEvent::Intent,
        intent: Some("TellCreditsIntent".to_string()),
        slots: Vec::new(),
        attributes: Vec::new(),
        session_id: "runtime-session".to_string(),
    };

    let offer = simulate::run(turn_one);
    assert_eq!(offer.exit_code, 0);
    let report: serde_json::Value = serde_json::from_str(&offer.output).expect("json");
    assert!(report["response"]["outputSpeech"]["text"]
        .as_str()
        .expect("speech text")
        .contains("purchase 5 credits for $12.99"));
    assert_eq!(report["session_attributes"]["CREDITS"], "5");

    // Replay the echoed attributes into a second turn, the way the platform
    // would between requests.
    let turn_two = simulate::SimulateArgs {
        event: simulate::SimulatedEvent::Intent,
        intent: Some("TellCreditsIntent".to_string()),
        slots: Vec::new(),
        attributes: vec![("CREDITS".to_string(), "5".to_string())],
        session_id: "runtime-session".to_string(),
    };

    let balance = simulate::run(turn_two);
    let report: serde_json::Value = serde_json::from_str(&balance.output).expect("json");
    assert_eq!(
        report["response"]["outputSpeech"]["text"],
        "You have is 5 movie credits available"
    );
}
