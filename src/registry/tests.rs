use super::*;

#[test]
fn parses_full_descriptor() {
    let body = r#"{"name": "foo", "command": "echo hi", "requirements": ["git"]}"#;
    let pkg = parse_descriptor("foo", body).unwrap();
    assert_eq!(pkg.name, "foo");
    assert_eq!(pkg.command, "echo hi");
    assert_eq!(pkg.requirements, vec!["git".to_string()]);
}

#[test]
fn missing_requirements_defaults_to_empty() {
    let body = r#"{"name": "bar", "command": "true"}"#;
    let pkg = parse_descriptor("bar", body).unwrap();
    assert!(pkg.requirements.is_empty());
}

#[test]
fn malformed_payload_is_a_parse_error() {
    let err = parse_descriptor("foo", "certainly not json").unwrap_err();
    match err {
        GhostError::DescriptorParseError { name, .. } => assert_eq!(name, "foo"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn incomplete_payload_never_yields_a_descriptor() {
    // `command` is mandatory; a descriptor without one is rejected.
    let err = parse_descriptor("foo", r#"{"name": "foo"}"#).unwrap_err();
    assert!(matches!(err, GhostError::DescriptorParseError { .. }));
}
