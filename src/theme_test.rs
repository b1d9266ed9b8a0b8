use super::*;

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggled_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn from_stored_decodes_known_values() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn from_stored_absent_is_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn from_stored_unknown_or_miscased_is_light() {
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("true")), Theme::Light);
}

#[test]
fn as_str_matches_display_and_decodes_back() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.to_string(), theme.as_str());
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).expect("serialize"), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").expect("deserialize");
    assert_eq!(parsed, Theme::Light);
}

#[test]
fn is_dark_only_for_dark() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}
