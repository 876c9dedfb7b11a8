use std::path::PathBuf;

use modgen_core::{ConfigError, parse_configuration};

#[test]
fn parses_stanzas_and_checkpoint_dir() {
    let payload = r#"
        <input>
            <configuration>
                <stanza name="A">
                    <param name="num_events">5</param>
                </stanza>
            </configuration>
            <checkpoint_dir>/tmp</checkpoint_dir>
        </input>
    "#;

    let config = parse_configuration(payload).expect("payload parses");
    assert_eq!(config.checkpoint_dir, PathBuf::from("/tmp"));
    assert_eq!(config.stanzas.len(), 1);

    let stanza = config.stanza("A").expect("stanza A present");
    assert_eq!(stanza.params.get("num_events").map(String::as_str), Some("5"));
}

#[test]
fn preserves_stanza_discovery_order() {
    let payload = r#"
        <input>
            <configuration>
                <stanza name="gen://beta"><param name="num_events">1</param></stanza>
                <stanza name="gen://alpha"><param name="num_events">1</param></stanza>
            </configuration>
            <checkpoint_dir>/var/lib/modgen</checkpoint_dir>
        </input>
    "#;

    let config = parse_configuration(payload).expect("payload parses");
    let names: Vec<&str> = config.stanzas.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["gen://beta", "gen://alpha"]);
}

#[test]
fn empty_configuration_yields_no_stanzas() {
    let payload = r#"
        <input>
            <configuration></configuration>
            <checkpoint_dir>/tmp</checkpoint_dir>
        </input>
    "#;

    let config = parse_configuration(payload).expect("empty configuration is valid");
    assert!(config.stanzas.is_empty());
}

#[test]
fn malformed_payload_is_fatal() {
    let result = parse_configuration("<input><configuration>");
    assert!(matches!(result, Err(ConfigError::Xml(_))));
}

#[test]
fn missing_configuration_element_is_fatal() {
    let payload = r#"
        <input>
            <checkpoint_dir>/tmp</checkpoint_dir>
        </input>
    "#;
    let result = parse_configuration(payload);
    assert!(matches!(result, Err(ConfigError::MissingConfiguration)));
}

#[test]
fn missing_checkpoint_dir_is_fatal() {
    let payload = r#"
        <input>
            <configuration>
                <stanza name="A"><param name="num_events">5</param></stanza>
            </configuration>
        </input>
    "#;
    let result = parse_configuration(payload);
    assert!(matches!(result, Err(ConfigError::MissingCheckpointDir)));
}

#[test]
fn stanza_without_name_is_fatal() {
    let payload = r#"
        <input>
            <configuration>
                <stanza><param name="num_events">5</param></stanza>
            </configuration>
            <checkpoint_dir>/tmp</checkpoint_dir>
        </input>
    "#;
    let result = parse_configuration(payload);
    assert!(matches!(result, Err(ConfigError::MissingStanzaName)));
}

#[test]
fn valueless_param_is_fatal() {
    let payload = r#"
        <input>
            <configuration>
                <stanza name="A"><param name="num_events"/></stanza>
            </configuration>
            <checkpoint_dir>/tmp</checkpoint_dir>
        </input>
    "#;
    let result = parse_configuration(payload);
    assert!(matches!(
        result,
        Err(ConfigError::MissingParamValue { .. })
    ));
}
