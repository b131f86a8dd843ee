use crate::base::error::ConsentError;

#[test]
fn test_configuration_error_classification() {
    assert!(ConsentError::MissingRequiredGroup.is_configuration_error());
    assert!(ConsentError::group_not_configured("Analytics").is_configuration_error());
    assert!(ConsentError::invalid_config("bad").is_configuration_error());

    let header = ConsentError::InvalidHeaderValue {
        name: "CookieConsent".to_string(),
    };
    assert!(!header.is_configuration_error());
}

#[test]
fn test_error_messages_name_the_group() {
    let err = ConsentError::group_not_configured("Marketing");
    assert!(err.to_string().contains("'Marketing'"));

    let err = ConsentError::duplicate_group("Analytics");
    assert!(err.to_string().contains("'Analytics'"));
}

#[test]
fn test_serde_json_error_maps_to_invalid_config() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{ nope");
    let err: ConsentError = parse.unwrap_err().into();
    assert!(matches!(err, ConsentError::InvalidConfig { .. }));
}
