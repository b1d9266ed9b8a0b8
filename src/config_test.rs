use super::*;

#[test]
fn default_matches_stock_markup() {
    let config = ToggleConfig::default();
    assert_eq!(config.storage_key, "data-theme");
    assert_eq!(config.link_selector, "#theme-link");
    assert_eq!(config.to_dark_selector, ".to-dark");
    assert_eq!(config.to_light_selector, ".to-light");
    assert_eq!(config.marker_attribute, "data-theme");
    assert!(!config.follow_system);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let config = ToggleConfig::from_json("{}").expect("config");
    assert_eq!(config, ToggleConfig::default());
}

#[test]
fn partial_object_overrides_only_named_fields() {
    let config = ToggleConfig::from_json(
        r#"{"dark_href": "/static/night.css", "follow_system": true, "log_level": "debug"}"#,
    )
    .expect("config");
    assert_eq!(config.dark_href, "/static/night.css");
    assert_eq!(config.light_href, DEFAULT_LIGHT_HREF);
    assert!(config.follow_system);
    assert_eq!(config.level(), log::Level::Debug);
}

#[test]
fn unknown_field_is_rejected() {
    let err = ToggleConfig::from_json(r#"{"themes": ["light", "dark", "sepia"]}"#).expect_err("unknown field");
    assert!(matches!(err, ToggleError::Config(_)));
}

#[test]
fn malformed_json_is_config_error() {
    let err = ToggleConfig::from_json("{not json").expect_err("malformed");
    assert!(matches!(err, ToggleError::Config(_)));
}

#[test]
fn identical_hrefs_are_rejected() {
    let err = ToggleConfig::from_json(r#"{"light_href": "a.css", "dark_href": "a.css"}"#).expect_err("same href");
    assert!(err.to_string().contains("light_href and dark_href"));
}

#[test]
fn identical_button_selectors_are_rejected() {
    let err = ToggleConfig::from_json(r#"{"to_dark_selector": ".btn", "to_light_selector": ".btn"}"#)
        .expect_err("same selector");
    assert!(err.to_string().contains("to_dark_selector"));
}

#[test]
fn blank_storage_key_is_rejected() {
    let err = ToggleConfig::from_json(r#"{"storage_key": "  "}"#).expect_err("blank key");
    assert!(err.to_string().contains("storage_key"));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = ToggleConfig::from_json(r#"{"log_level": "loud"}"#).expect_err("bad level");
    assert!(err.to_string().contains("log_level"));
}

#[test]
fn href_lookup_is_bidirectional() {
    let config = ToggleConfig::default();
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(config.theme_for_href(config.href_for(theme)), Some(theme));
    }
    assert_eq!(config.theme_for_href("css/sepia.css"), None);
}

#[test]
fn level_defaults_to_info() {
    assert_eq!(ToggleConfig::default().level(), log::Level::Info);
}
