//! Configuration loader tests.

use std::collections::HashMap;

use movie_gateway::config::{ConfigError, Settings};

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map: HashMap<&str, &str> = vars.iter().copied().collect();
    move |key| map.get(key).map(|value| value.to_string())
}

#[test]
fn loads_required_values_with_defaults() {
    let settings = Settings::from_lookup(lookup(&[
        ("URL", "https://www.omdbapi.com/"),
        ("OMDBKey", "abc123"),
    ]))
    .unwrap();

    assert_eq!(settings.upstream.base_url, "https://www.omdbapi.com/");
    assert_eq!(settings.upstream.api_key, "abc123");
    assert_eq!(settings.listener.bind_address, "0.0.0.0:8080");
    assert_eq!(settings.timeouts.read_secs, 5);
    assert_eq!(settings.timeouts.write_secs, 10);
    assert_eq!(settings.timeouts.drain_secs, 5);
    assert_eq!(settings.observability.log_level, "info");
    assert_eq!(settings.observability.log_file, "info.log");
}

#[test]
fn accepts_uppercase_key_fallback() {
    let settings = Settings::from_lookup(lookup(&[
        ("URL", "https://www.omdbapi.com/"),
        ("OMDBKEY", "abc123"),
    ]))
    .unwrap();

    assert_eq!(settings.upstream.api_key, "abc123");
}

#[test]
fn prefers_mixed_case_key_over_uppercase() {
    let settings = Settings::from_lookup(lookup(&[
        ("URL", "https://www.omdbapi.com/"),
        ("OMDBKey", "mixed"),
        ("OMDBKEY", "upper"),
    ]))
    .unwrap();

    assert_eq!(settings.upstream.api_key, "mixed");
}

#[test]
fn missing_url_is_an_error() {
    let error = Settings::from_lookup(lookup(&[("OMDBKey", "abc123")])).unwrap_err();
    assert!(matches!(error, ConfigError::Missing("URL")));
}

#[test]
fn missing_api_key_is_an_error() {
    let error =
        Settings::from_lookup(lookup(&[("URL", "https://www.omdbapi.com/")])).unwrap_err();
    assert!(matches!(error, ConfigError::Missing("OMDBKey")));
}

#[test]
fn empty_values_count_as_missing() {
    let error = Settings::from_lookup(lookup(&[
        ("URL", "https://www.omdbapi.com/"),
        ("OMDBKey", ""),
    ]))
    .unwrap_err();
    assert!(matches!(error, ConfigError::Missing("OMDBKey")));

    let error = Settings::from_lookup(lookup(&[("URL", ""), ("OMDBKey", "abc123")])).unwrap_err();
    assert!(matches!(error, ConfigError::Missing("URL")));
}

#[test]
fn relative_base_url_is_rejected() {
    let error = Settings::from_lookup(lookup(&[
        ("URL", "www.omdbapi.com"),
        ("OMDBKey", "abc123"),
    ]))
    .unwrap_err();
    assert!(matches!(error, ConfigError::Invalid { key: "URL", .. }));
}

#[test]
fn optional_overrides_are_applied() {
    let settings = Settings::from_lookup(lookup(&[
        ("URL", "https://www.omdbapi.com/"),
        ("OMDBKey", "abc123"),
        ("BIND_ADDRESS", "127.0.0.1:9090"),
        ("LOG_FILE", "gateway.log"),
        ("LOG_LEVEL", "debug"),
    ]))
    .unwrap();

    assert_eq!(settings.listener.bind_address, "127.0.0.1:9090");
    assert_eq!(settings.observability.log_file, "gateway.log");
    assert_eq!(settings.observability.log_level, "debug");
}

#[test]
fn query_urls_concatenate_verbatim() {
    let settings = Settings::from_lookup(lookup(&[
        ("URL", "https://www.omdbapi.com/"),
        ("OMDBKey", "abc123"),
    ]))
    .unwrap();

    assert_eq!(
        settings.upstream.search_url("tom&jerry", "2"),
        "https://www.omdbapi.com/?apikey=abc123&s=tom&jerry&page=2"
    );
    assert_eq!(
        settings.upstream.lookup_url("tt0096895"),
        "https://www.omdbapi.com/?apikey=abc123&i=tt0096895"
    );
}
