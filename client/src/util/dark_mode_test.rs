use super::*;

#[test]
fn stored_preference_overrides_system() {
    assert!(resolve_preference(Some("true"), false));
    assert!(!resolve_preference(Some("false"), true));
}

#[test]
fn missing_or_garbled_preference_uses_system() {
    assert!(resolve_preference(None, true));
    assert!(!resolve_preference(None, false));
    assert!(resolve_preference(Some("yes"), true));
}

#[test]
fn theme_name_maps_flag() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn toggle_flips_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
