use modgen_core::{ValidationError, validate_stanza};

fn item_with_num_events(value: &str) -> String {
    format!(
        r#"<items>
            <item name="gen://test">
                <param name="num_events">{value}</param>
            </item>
        </items>"#
    )
}

#[test]
fn accepts_positive_num_events() {
    for value in ["1", "100"] {
        validate_stanza(&item_with_num_events(value))
            .unwrap_or_else(|err| panic!("'{value}' should validate: {err}"));
    }
}

#[test]
fn rejects_non_positive_num_events() {
    for value in ["0", "-1"] {
        let result = validate_stanza(&item_with_num_events(value));
        assert!(
            matches!(result, Err(ValidationError::OutOfRange { .. })),
            "'{value}' should be out of range"
        );
    }
}

#[test]
fn rejects_non_numeric_num_events() {
    let result = validate_stanza(&item_with_num_events("abc"));
    assert!(matches!(result, Err(ValidationError::NotAnInteger { .. })));
}

#[test]
fn rejects_valueless_num_events() {
    let payload = r#"<items>
        <item name="gen://test">
            <param name="num_events"/>
        </item>
    </items>"#;
    let result = validate_stanza(payload);
    assert!(matches!(result, Err(ValidationError::MissingValue { .. })));
}

#[test]
fn rejects_payload_without_item() {
    let result = validate_stanza("<items></items>");
    assert!(matches!(result, Err(ValidationError::MissingItem)));
}

#[test]
fn rejects_malformed_payload() {
    let result = validate_stanza("not markup at all");
    assert!(matches!(result, Err(ValidationError::Xml(_))));
}

#[test]
fn params_without_rules_only_need_a_value() {
    let payload = r#"<items>
        <item name="gen://test">
            <param name="note">free-form text</param>
        </item>
    </items>"#;
    validate_stanza(payload).expect("unknown params pass with a value present");
}

#[test]
fn accepts_item_without_num_events() {
    // No registered rule fires; acceptability of defaults is the host's call.
    let payload = r#"<items><item name="gen://test"></item></items>"#;
    validate_stanza(payload).expect("item without params validates");
}
