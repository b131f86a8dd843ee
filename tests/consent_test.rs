//! Consent ledger integration tests: a visitor's choices across requests.

use cookie::Cookie;
use cookieconsent::base::error::ConsentError;
use cookieconsent::consent::config::ConsentConfig;
use cookieconsent::consent::ledger::ConsentLedger;
use cookieconsent::cookies::jar::ConsentJar;
use http::header::{HeaderMap, HeaderValue, COOKIE, HOST, SET_COOKIE};

const CONFIG: &str = r#"{
    "Necessary": { "local": ["PHPSESSID"] },
    "Analytics": { "local": ["_ga", "_gid"] },
    "Marketing": { "www_facebook_com": ["fr"], "local": ["_fbp"] }
}"#;

fn config() -> ConsentConfig {
    ConsentConfig::from_json_str(CONFIG).unwrap()
}

fn request(host: &'static str, cookies: Option<&'static str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(HOST, HeaderValue::from_static(host));
    if let Some(cookies) = cookies {
        headers.insert(COOKIE, HeaderValue::from_static(cookies));
    }
    headers
}

fn set_cookies(headers: &HeaderMap) -> Vec<Cookie<'static>> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| {
            Cookie::parse_encoded(v.to_str().unwrap().to_string())
                .unwrap()
                .into_owned()
        })
        .collect()
}

#[test]
fn test_grant_then_remove_scenario() {
    let config = config();

    // First visit: nothing accepted yet.
    let mut ledger = ConsentLedger::from_headers(&config, &request("example.com", None));
    assert!(ledger.get_consent().is_empty());

    ledger.grant("Analytics");
    let mut response = HeaderMap::new();
    ledger.write_response_headers(&mut response).unwrap();

    let written = set_cookies(&response);
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].name(), "CookieConsent");
    assert_eq!(written[0].value(), "Analytics,Necessary");

    // Second visit: the browser sends the cookie back, visitor revokes.
    let mut ledger = ConsentLedger::from_headers(
        &config,
        &request("example.com", Some("CookieConsent=Analytics%2CNecessary; _ga=GA1.1")),
    );
    assert!(ledger.check("Analytics").unwrap());

    ledger.remove("Analytics");
    let mut response = HeaderMap::new();
    ledger.write_response_headers(&mut response).unwrap();

    let written = set_cookies(&response);
    let names: Vec<_> = written.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["_ga", "_gid", "CookieConsent"]);

    for expiry in &written[..2] {
        assert_eq!(expiry.domain(), Some("example.com"));
        assert_eq!(expiry.value(), "");
        assert_eq!(expiry.max_age(), Some(time::Duration::ZERO));
    }
    assert_eq!(written[2].value(), "Necessary");
}

#[test]
fn test_unconfigured_check_always_fails() {
    let config = config();
    let ledger = ConsentLedger::from_headers(
        &config,
        &request("example.com", Some("CookieConsent=Preferences%2CNecessary")),
    );

    for group in ["Preferences", "", "necessary", "Analytics "] {
        let err = ledger.check(group).unwrap_err();
        assert_eq!(err, ConsentError::group_not_configured(group));
        assert!(err.is_configuration_error());
    }
}

#[test]
fn test_grant_all_covers_every_group() {
    let config = config();
    let mut ledger = ConsentLedger::new(&config, "example.com", ConsentJar::new());
    ledger.grant_all();

    for group in config.group_names() {
        assert!(ledger.check(group).unwrap(), "{group} should be granted");
    }
}

#[test]
fn test_required_group_survives_every_removal() {
    let config = config();
    let mut ledger = ConsentLedger::new(&config, "example.com", ConsentJar::new());
    ledger.grant_all();

    let names: Vec<String> = config.group_names().map(str::to_string).collect();
    for group in &names {
        ledger.remove(group);
        assert!(ledger.check("Necessary").unwrap());
    }
    assert_eq!(ledger.persisted_value(), Some("Necessary"));
}

#[test]
fn test_literal_host_expiry() {
    let config = config();
    let mut ledger = ConsentLedger::from_headers(&config, &request("shop.example.com:443", None));
    ledger.remove("Marketing");

    let domains: Vec<_> = ledger
        .pending_cookies()
        .iter()
        .filter(|c| c.name() != "CookieConsent")
        .map(|c| (c.name().to_string(), c.domain().map(str::to_string)))
        .collect();

    assert_eq!(
        domains,
        vec![
            ("fr".to_string(), Some("www.facebook.com".to_string())),
            ("_fbp".to_string(), Some("shop.example.com".to_string())),
        ]
    );
}

#[test]
fn test_read_only_request_writes_nothing() {
    let config = config();
    let ledger = ConsentLedger::from_headers(
        &config,
        &request("example.com", Some("CookieConsent=Marketing%2CNecessary")),
    );
    assert!(ledger.check("Marketing").unwrap());
    assert!(!ledger.check("Analytics").unwrap());

    let mut response = HeaderMap::new();
    ledger.write_response_headers(&mut response).unwrap();
    assert!(response.is_empty());
}

#[test]
fn test_tampered_cookie_value() {
    let config = config();
    let ledger = ConsentLedger::new(
        &config,
        "example.com",
        ConsentJar::from_cookie_header("CookieConsent=%2C%2CAnalytics%2CAnalytics%2C"),
    );
    assert_eq!(ledger.get_consent(), vec!["Analytics"]);
}
