//! Integration and property tests for semantic path resolution.

use proptest::prelude::*;
use viewscreen_theme::{
    compose_theme, is_valid_path, resolve_many, resolve_path, CustomColors, PaletteColor,
    SemanticPath, ThemeConfig,
};

// ============================================================================
// Resolution against built-in variants
// ============================================================================

#[test]
fn every_valid_path_resolves_in_every_builtin_variant() {
    let config = ThemeConfig::default();
    for name in ["voyager", "tng", "ds9", "discovery"] {
        let theme = compose_theme(&config, name, None);
        for path in SemanticPath::all() {
            let color = resolve_path(&theme, &path.to_string());
            assert!(
                color.channels().is_ok(),
                "variant '{}', path '{}' resolved to unparseable '{}'",
                name,
                path,
                color
            );
        }
    }
}

#[test]
fn voyager_success_is_the_green_token() {
    let theme = compose_theme(&ThemeConfig::default(), "voyager", None);
    assert_eq!(
        resolve_path(&theme, "status.success").as_str(),
        PaletteColor::Green.hex()
    );
}

#[test]
fn invalid_path_degrades_to_frame_primary() {
    let theme = compose_theme(&ThemeConfig::default(), "voyager", None);
    let fallback = resolve_path(&theme, "frame.primary");
    assert_eq!(resolve_path(&theme, "status.bogus"), fallback);
    assert_eq!(resolve_path(&theme, "nonsense"), fallback);
}

#[test]
fn resolve_many_degrades_entrywise() {
    let theme = compose_theme(&ThemeConfig::default(), "discovery", None);
    let resolved = resolve_many(
        &theme,
        &[
            ("bar", "frame.topbar"),
            ("broken", "frame.warpNacelle"),
            ("link", "content.link"),
        ],
    );

    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved["bar"].as_str(), "#0088FF");
    assert_eq!(resolved["link"].as_str(), "#FFBB00");
    assert_eq!(resolved["broken"], resolve_path(&theme, "frame.primary"));
}

#[test]
fn validity_check_agrees_with_resolution() {
    // is_valid_path and the resolver share one schema; a path is valid
    // exactly when resolving it does not need the fallback.
    let theme = compose_theme(&ThemeConfig::default(), "tng", None);
    for path in SemanticPath::all() {
        let rendered = path.to_string();
        assert!(is_valid_path(&rendered));
        assert_eq!(resolve_path(&theme, &rendered).as_str(), theme.semantic(path).unwrap().as_str());
    }
    for bad in ["frame", "frame.primary.x", "status.ok", "panel.sweep"] {
        assert!(!is_valid_path(bad), "{}", bad);
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Resolution is total: any string at all yields a parseable color,
    /// without panicking.
    #[test]
    fn arbitrary_strings_resolve_to_some_valid_color(path in ".{0,40}") {
        let theme = compose_theme(&ThemeConfig::default(), "voyager", None);
        let color = resolve_path(&theme, &path);
        prop_assert!(color.channels().is_ok());
    }

    /// Same totality holds against a fully unbound custom mapping.
    #[test]
    fn arbitrary_strings_resolve_against_empty_custom(path in ".{0,40}") {
        let custom = CustomColors::default();
        let theme = compose_theme(&ThemeConfig::default(), "custom", Some(&custom));
        let color = resolve_path(&theme, &path);
        prop_assert!(color.channels().is_ok());
    }

    /// An arbitrary variant name always composes a usable theme.
    #[test]
    fn arbitrary_variant_names_compose(name in "[a-z0-9]{0,16}") {
        let theme = compose_theme(&ThemeConfig::default(), &name, None);
        let color = resolve_path(&theme, "frame.primary");
        prop_assert!(color.channels().is_ok());
    }
}
