use crate::RemoteConfig;

#[test]
fn test_default_is_valid() {
    RemoteConfig::default().validate().unwrap();
}

#[test]
fn test_empty_base_url_rejected() {
    let config = RemoteConfig {
        base_url: "   ".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_non_http_scheme_rejected() {
    let config = RemoteConfig {
        base_url: "ftp://example.com".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_https_accepted() {
    let config = RemoteConfig {
        base_url: "https://scrum.example.com".to_string(),
    };
    config.validate().unwrap();
}
