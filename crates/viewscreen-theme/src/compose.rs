//! Theme composition: variant + custom mapping + configuration in, one
//! immutable snapshot out.
//!
//! [`compose_theme`] is a pure function; composing twice with the same
//! inputs yields structurally equal snapshots, and a published [`Theme`]
//! is never mutated afterward. Callers holding an old snapshot keep seeing
//! internally consistent values until they re-read.
//!
//! # Example
//!
//! ```rust
//! use viewscreen_theme::{compose_theme, ThemeConfig};
//!
//! let theme = compose_theme(&ThemeConfig::default(), "voyager", None);
//! // The flattened legacy names track the active variant's semantics.
//! assert_eq!(theme.legacy_color("main").unwrap().as_str(), "#2255FF");
//! assert_eq!(theme.legacy_color("evening").unwrap().as_str(), "#2255FF");
//! ```

use crate::color::Color;
use crate::config::ThemeConfig;
use crate::palette::PaletteColor;
use crate::semantic::{BackgroundSlot, CustomColors, FrameSlot, SemanticPath};
use crate::variant::{builtin_colors, SemanticMapping, VariantName, VOYAGER};

/// The flattened legacy color table derived at composition time.
///
/// The three historical names bind to fixed semantic slots (`main` to
/// `frame.primary`, `alt1` to `frame.accent`, `alt2` to `frame.secondary`)
/// so they always reflect the active variant. Fields are optional because
/// a partial custom mapping may leave the underlying slot unbound.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyColors {
    pub main: Option<Color>,
    pub alt1: Option<Color>,
    pub alt2: Option<Color>,
    pub background: Option<Color>,
}

/// A fully resolved, immutable theme snapshot.
///
/// Produced by [`compose_theme`]; replaced wholesale on every variant or
/// configuration change, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// The variant this snapshot was composed from.
    pub variant: VariantName,
    /// The active semantic mapping.
    pub semantic: SemanticMapping,
    /// Derived legacy accessors; see [`LegacyColors`].
    pub legacy: LegacyColors,
    /// Non-color configuration, carried through unchanged.
    pub config: ThemeConfig,
}

impl Theme {
    /// Returns the color bound to a typed path, if the mapping binds it.
    ///
    /// This is the typed fast path; string-path callers go through
    /// [`resolve_path`](crate::resolve_path) instead.
    pub fn semantic(&self, path: SemanticPath) -> Option<&Color> {
        self.semantic.get(path)
    }

    /// The color used when resolution fails: the active `frame.primary`,
    /// or the default variant's if a custom mapping leaves even that
    /// unbound.
    pub fn fallback_color(&self) -> Color {
        self.semantic
            .get(SemanticPath::FALLBACK)
            .cloned()
            .unwrap_or_else(|| VOYAGER.get(SemanticPath::FALLBACK).clone())
    }

    /// Looks a name up in the flattened legacy table.
    ///
    /// Answers the three legacy names, every palette entry verbatim, and
    /// `background`. Returns `None` for anything else; the deprecation
    /// machinery in [`crate::migration`] sits in front of this for the
    /// public lookup.
    pub fn legacy_color(&self, name: &str) -> Option<Color> {
        match name {
            "main" => self.legacy.main.clone(),
            "alt1" => self.legacy.alt1.clone(),
            "alt2" => self.legacy.alt2.clone(),
            "background" => self.legacy.background.clone(),
            _ => PaletteColor::from_name(name).map(|p| p.color()),
        }
    }
}

/// Composes a theme snapshot from its three inputs.
///
/// `variant_name` is resolved through the registry's fallback policy
/// (unknown names become the default variant, silently). `custom` is only
/// consulted when the resolved variant is `custom`; a missing mapping
/// there behaves as an empty one, degrading at resolution time rather
/// than failing here.
pub fn compose_theme(
    config: &ThemeConfig,
    variant_name: &str,
    custom: Option<&CustomColors>,
) -> Theme {
    let variant = VariantName::resolve(variant_name);

    let semantic = match variant {
        VariantName::Custom => {
            SemanticMapping::custom(custom.cloned().unwrap_or_default())
        }
        builtin => SemanticMapping::Builtin(builtin_colors(builtin)),
    };

    let legacy = LegacyColors {
        main: semantic.get(SemanticPath::Frame(FrameSlot::Primary)).cloned(),
        alt1: semantic.get(SemanticPath::Frame(FrameSlot::Accent)).cloned(),
        alt2: semantic
            .get(SemanticPath::Frame(FrameSlot::Secondary))
            .cloned(),
        background: semantic
            .get(SemanticPath::Background(BackgroundSlot::Base))
            .cloned(),
    };

    Theme {
        variant,
        semantic,
        legacy,
        config: config.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::{CustomColors, CustomFrameColors};

    fn default_theme() -> Theme {
        compose_theme(&ThemeConfig::default(), "voyager", None)
    }

    #[test]
    fn test_compose_is_idempotent() {
        let config = ThemeConfig::default();
        let a = compose_theme(&config, "tng", None);
        let b = compose_theme(&config, "tng", None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_legacy_table_tracks_variant() {
        let config = ThemeConfig::default();

        let voyager = compose_theme(&config, "voyager", None);
        assert_eq!(voyager.legacy.main.as_ref().unwrap().as_str(), "#2255FF");
        assert_eq!(voyager.legacy.alt1.as_ref().unwrap().as_str(), "#FFCC99");
        assert_eq!(voyager.legacy.alt2.as_ref().unwrap().as_str(), "#5588FF");

        let tng = compose_theme(&config, "tng", None);
        assert_eq!(tng.legacy.main.as_ref().unwrap().as_str(), "#FF9900");
    }

    #[test]
    fn test_legacy_main_matches_frame_primary() {
        for name in ["voyager", "tng", "ds9", "discovery"] {
            let theme = compose_theme(&ThemeConfig::default(), name, None);
            assert_eq!(
                theme.legacy.main.as_ref(),
                theme.semantic(SemanticPath::Frame(FrameSlot::Primary)),
                "variant '{}'",
                name
            );
        }
    }

    #[test]
    fn test_unknown_variant_composes_default() {
        let config = ThemeConfig::default();
        let theme = compose_theme(&config, "romulan", None);
        assert_eq!(theme.variant, VariantName::Voyager);
        assert_eq!(theme, compose_theme(&config, "voyager", None));
    }

    #[test]
    fn test_legacy_color_covers_palette_names() {
        let theme = default_theme();
        assert_eq!(theme.legacy_color("evening").unwrap().as_str(), "#2255FF");
        assert_eq!(theme.legacy_color("paleBlue").unwrap().as_str(), "#9999CC");
        assert_eq!(
            theme.legacy_color("gold-pressed-latinum").unwrap().as_str(),
            "#FFFF99"
        );
        assert_eq!(theme.legacy_color("warpcore"), None);
    }

    #[test]
    fn test_legacy_background_is_base_surface() {
        let theme = default_theme();
        assert_eq!(theme.legacy_color("background").unwrap().as_str(), "#000000");
    }

    #[test]
    fn test_custom_without_mapping_composes_empty() {
        let theme = compose_theme(&ThemeConfig::default(), "custom", None);
        assert_eq!(theme.variant, VariantName::Custom);
        assert_eq!(theme.legacy.main, None);
        assert_eq!(theme.legacy_color("main"), None);
        // Palette names still answer; they are static data.
        assert!(theme.legacy_color("orange").is_some());
    }

    #[test]
    fn test_custom_mapping_feeds_legacy_table() {
        let custom = CustomColors {
            frame: CustomFrameColors {
                primary: Some(Color::from_static("#AA00AA")),
                ..Default::default()
            },
            ..Default::default()
        };
        let theme = compose_theme(&ThemeConfig::default(), "custom", Some(&custom));
        assert_eq!(theme.legacy.main.as_ref().unwrap().as_str(), "#AA00AA");
        assert_eq!(theme.legacy.alt1, None);
    }

    #[test]
    fn test_custom_ignored_for_builtin_variant() {
        let custom = CustomColors {
            frame: CustomFrameColors {
                primary: Some(Color::from_static("#AA00AA")),
                ..Default::default()
            },
            ..Default::default()
        };
        let theme = compose_theme(&ThemeConfig::default(), "ds9", Some(&custom));
        assert_eq!(theme.legacy.main.as_ref().unwrap().as_str(), "#6666FF");
    }

    #[test]
    fn test_fallback_color_from_builtin() {
        let theme = default_theme();
        assert_eq!(theme.fallback_color().as_str(), "#2255FF");
    }

    #[test]
    fn test_fallback_color_custom_last_resort() {
        // A custom mapping with no frame.primary falls back to the default
        // variant's value.
        let theme = compose_theme(&ThemeConfig::default(), "custom", None);
        assert_eq!(theme.fallback_color().as_str(), "#2255FF");
    }

    #[test]
    fn test_config_carried_through_unchanged() {
        let mut config = ThemeConfig::default();
        config.frame.border.width = 9;
        let theme = compose_theme(&config, "discovery", None);
        assert_eq!(theme.config.frame.border.width, 9);
    }
}
