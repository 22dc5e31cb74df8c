//! Built-in theme variants and the variant registry.
//!
//! Four presets ship compiled in: `voyager` (deep blues with warm accents),
//! `tng` (amber and lilac), `ds9` (darker, warmer), and `discovery`
//! (high-contrast blue and gold). A fifth identifier, `custom`, is reserved
//! for caller-supplied mappings and never lives in the registry itself.
//!
//! Lookup never fails: an unknown or stale variant name falls back to the
//! default preset so a misconfigured host still gets a usable theme. This
//! is deliberate and silent, unlike path resolution which reports.
//!
//! # Example
//!
//! ```rust
//! use viewscreen_theme::{variant_colors, VariantName};
//!
//! assert_eq!(VariantName::resolve("ds9"), VariantName::Ds9);
//! assert_eq!(VariantName::resolve("klingon"), VariantName::Voyager);
//!
//! let colors = variant_colors("tng");
//! assert_eq!(colors.frame.primary.as_str(), "#FF9900");
//! ```

use std::fmt;

use crate::color::Color;
use crate::palette::PaletteColor as P;
use crate::semantic::{
    ActionColors, BackgroundColors, ContentColors, CustomColors, DataColors, DecorativeColors,
    FrameColors, InterfaceColors, NavigationColors, SemanticColors, SemanticPath, StatusColors,
    SystemColors,
};

/// Identifier of a theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantName {
    Voyager,
    Tng,
    Ds9,
    Discovery,
    /// Caller-supplied mapping; see [`crate::CustomColors`].
    Custom,
}

impl VariantName {
    /// The default variant, used whenever a name does not resolve.
    pub const DEFAULT: VariantName = VariantName::Voyager;

    /// The compiled-in presets (excludes `custom`).
    pub const BUILTIN: &'static [VariantName] = &[
        VariantName::Voyager,
        VariantName::Tng,
        VariantName::Ds9,
        VariantName::Discovery,
    ];

    /// Returns the public identifier of this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            VariantName::Voyager => "voyager",
            VariantName::Tng => "tng",
            VariantName::Ds9 => "ds9",
            VariantName::Discovery => "discovery",
            VariantName::Custom => "custom",
        }
    }

    /// Resolves a variant identifier, falling back to the default.
    ///
    /// Unknown names yield [`VariantName::DEFAULT`] rather than an error;
    /// a typo'd or stale name from configuration must still produce a
    /// fully usable theme.
    pub fn resolve(name: &str) -> VariantName {
        match name {
            "voyager" => VariantName::Voyager,
            "tng" => VariantName::Tng,
            "ds9" => VariantName::Ds9,
            "discovery" => VariantName::Discovery,
            "custom" => VariantName::Custom,
            _ => VariantName::DEFAULT,
        }
    }
}

impl fmt::Display for VariantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The semantic mapping attached to a composed theme.
///
/// Built-in variants answer every path; custom mappings answer only the
/// slots the caller bound.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticMapping {
    /// A complete compiled-in mapping.
    Builtin(&'static SemanticColors),
    /// A caller-supplied partial mapping.
    Custom(CustomColors),
}

impl SemanticMapping {
    /// Wraps caller-supplied colors as the `custom` variant's mapping.
    ///
    /// No totality validation happens here; unbound slots degrade at
    /// resolution time.
    pub fn custom(colors: CustomColors) -> SemanticMapping {
        SemanticMapping::Custom(colors)
    }

    /// Returns the color bound to `path`, if any.
    pub fn get(&self, path: SemanticPath) -> Option<&Color> {
        match self {
            SemanticMapping::Builtin(colors) => Some(colors.get(path)),
            SemanticMapping::Custom(colors) => colors.get(path),
        }
    }

    /// Deprecated interface-state colors, when the mapping carries them.
    pub fn interface(&self) -> Option<&InterfaceColors> {
        match self {
            SemanticMapping::Builtin(colors) => colors.interface.as_ref(),
            SemanticMapping::Custom(_) => None,
        }
    }

    /// Deprecated system-status colors, when the mapping carries them.
    pub fn system(&self) -> Option<&SystemColors> {
        match self {
            SemanticMapping::Builtin(colors) => colors.system.as_ref(),
            SemanticMapping::Custom(_) => None,
        }
    }
}

/// Returns the complete mapping for a built-in variant.
///
/// `custom` has no registry entry and resolves to the default preset,
/// matching [`VariantName::resolve`]'s fallback policy.
pub fn builtin_colors(variant: VariantName) -> &'static SemanticColors {
    match variant {
        VariantName::Voyager | VariantName::Custom => &VOYAGER,
        VariantName::Tng => &TNG,
        VariantName::Ds9 => &DS9,
        VariantName::Discovery => &DISCOVERY,
    }
}

/// Looks a variant's mapping up by name, falling back to the default.
pub fn variant_colors(name: &str) -> &'static SemanticColors {
    builtin_colors(VariantName::resolve(name))
}

/// Deep blues with warm accents.
pub static VOYAGER: SemanticColors = SemanticColors {
    frame: FrameColors {
        primary: P::Evening.color(),
        secondary: P::Cool.color(),
        accent: P::Honey.color(),
        divider: P::Midnight.color(),
        corner: P::Evening.color(),
        sidebar: P::Cool.color(),
        topbar: P::Evening.color(),
    },
    action: ActionColors {
        primary: P::Orange.color(),
        primary_hover: P::Mango.color(),
        primary_active: P::Pumpkin.color(),
        secondary: P::Lilac.color(),
        secondary_hover: P::Purple.color(),
        secondary_active: P::Magenta.color(),
        disabled: P::Gray.color(),
        focus: P::SkyBlue.color(),
    },
    navigation: NavigationColors {
        item: P::Cool.color(),
        item_hover: P::SkyBlue.color(),
        item_active: P::Green.color(),
        item_disabled: P::Galaxy.color(),
        indicator: P::Honey.color(),
        breadcrumb: P::Ghost.color(),
    },
    status: StatusColors {
        info: P::Cool.color(),
        info_light: P::Ice.color(),
        success: P::Green.color(),
        success_light: P::Bluey.color(),
        warning: P::Tangerine.color(),
        warning_light: P::Peach.color(),
        warning_critical: P::Orange.color(),
        error: P::Cardinal.color(),
        error_light: P::Brick.color(),
        error_critical: P::Mars.color(),
        neutral: P::Gray.color(),
    },
    content: ContentColors {
        primary: P::Ghost.color(),
        secondary: P::Cool.color(),
        tertiary: P::Sage.color(),
        inverse: P::Moonshine.color(),
        link: P::SkyBlue.color(),
        link_hover: P::BigBlue.color(),
        link_visited: P::PaleBlue.color(),
        code: P::Green.color(),
        heading: P::Evening.color(),
    },
    background: BackgroundColors {
        base: Color::from_static("#000000"),
        elevated: Color::from_static("#111111"),
        elevated_higher: Color::from_static("#222222"),
        depressed: Color::from_static("#000033"),
        overlay: Color::from_static("rgba(0, 0, 0, 0.8)"),
        stripe: Color::from_static("#0a0a0a"),
    },
    data: DataColors {
        series1: P::Orange.color(),
        series2: P::Cool.color(),
        series3: P::Green.color(),
        series4: P::Purple.color(),
        series5: P::Honey.color(),
        positive: P::Green.color(),
        negative: P::Cardinal.color(),
        neutral: P::Gray.color(),
    },
    decorative: DecorativeColors {
        sweep: P::Evening.color(),
        elbow: P::Cool.color(),
        pill: P::Honey.color(),
        bracket: P::Midnight.color(),
        terminal: P::Green.color(),
        hologram: P::Ice.color(),
        alert: P::Cardinal.color(),
        caution: P::Tangerine.color(),
    },
    interface: Some(InterfaceColors {
        active: P::Green.color(),
        inactive: P::Galaxy.color(),
        hover: P::SkyBlue.color(),
        pressed: P::PaleBlue.color(),
    }),
    system: Some(SystemColors {
        success: P::Green.color(),
        warning: P::Tangerine.color(),
        error: P::Cardinal.color(),
        info: P::Cool.color(),
    }),
};

/// Amber and lilac.
pub static TNG: SemanticColors = SemanticColors {
    frame: FrameColors {
        primary: P::Orange.color(),
        secondary: P::Lilac.color(),
        accent: P::PaleBlue.color(),
        divider: P::Purple.color(),
        corner: P::Orange.color(),
        sidebar: P::Lilac.color(),
        topbar: P::Orange.color(),
    },
    action: ActionColors {
        primary: P::BigBlue.color(),
        primary_hover: P::SkyBlue.color(),
        primary_active: P::Evening.color(),
        secondary: P::Honey.color(),
        secondary_hover: P::Peach.color(),
        secondary_active: P::Naples.color(),
        disabled: P::Gray.color(),
        focus: P::PaleBlue.color(),
    },
    navigation: NavigationColors {
        item: P::Lilac.color(),
        item_hover: P::Purple.color(),
        item_active: P::BigBlue.color(),
        item_disabled: P::Galaxy.color(),
        indicator: P::Orange.color(),
        breadcrumb: P::Ghost.color(),
    },
    status: StatusColors {
        info: P::PaleBlue.color(),
        info_light: P::Ice.color(),
        success: P::Green.color(),
        success_light: P::Bluey.color(),
        warning: P::Honey.color(),
        warning_light: P::Peach.color(),
        warning_critical: P::Orange.color(),
        error: P::Brick.color(),
        error_light: P::Roseblush.color(),
        error_critical: P::Cardinal.color(),
        neutral: P::Gray.color(),
    },
    content: ContentColors {
        primary: P::Ghost.color(),
        secondary: P::Lilac.color(),
        tertiary: P::Sage.color(),
        inverse: P::Moonshine.color(),
        link: P::PaleBlue.color(),
        link_hover: P::SkyBlue.color(),
        link_visited: P::Purple.color(),
        code: P::Green.color(),
        heading: P::Orange.color(),
    },
    background: BackgroundColors {
        base: Color::from_static("#000000"),
        elevated: Color::from_static("#111111"),
        elevated_higher: Color::from_static("#222222"),
        depressed: Color::from_static("#110011"),
        overlay: Color::from_static("rgba(0, 0, 0, 0.8)"),
        stripe: Color::from_static("#0a0a0a"),
    },
    data: DataColors {
        series1: P::Orange.color(),
        series2: P::Lilac.color(),
        series3: P::BigBlue.color(),
        series4: P::Green.color(),
        series5: P::Honey.color(),
        positive: P::Green.color(),
        negative: P::Brick.color(),
        neutral: P::Gray.color(),
    },
    decorative: DecorativeColors {
        sweep: P::Orange.color(),
        elbow: P::Lilac.color(),
        pill: P::PaleBlue.color(),
        bracket: P::Purple.color(),
        terminal: P::Green.color(),
        hologram: P::Ice.color(),
        alert: P::Cardinal.color(),
        caution: P::Honey.color(),
    },
    interface: Some(InterfaceColors {
        active: P::Green.color(),
        inactive: P::Galaxy.color(),
        hover: P::SkyBlue.color(),
        pressed: P::PaleBlue.color(),
    }),
    system: Some(SystemColors {
        success: P::Green.color(),
        warning: P::Tangerine.color(),
        error: P::Cardinal.color(),
        info: P::Cool.color(),
    }),
};

/// Darker and warmer.
pub static DS9: SemanticColors = SemanticColors {
    frame: FrameColors {
        primary: P::BigBlue.color(),
        secondary: P::Purple.color(),
        accent: P::Mango.color(),
        divider: P::Galaxy.color(),
        corner: P::BigBlue.color(),
        sidebar: P::Purple.color(),
        topbar: P::BigBlue.color(),
    },
    action: ActionColors {
        primary: P::Mango.color(),
        primary_hover: P::Orange.color(),
        primary_active: P::Pumpkin.color(),
        secondary: P::Wheat.color(),
        secondary_hover: P::Camel.color(),
        secondary_active: P::Rust.color(),
        disabled: P::Galaxy.color(),
        focus: P::Violet.color(),
    },
    navigation: NavigationColors {
        item: P::Purple.color(),
        item_hover: P::Magenta.color(),
        item_active: P::Mango.color(),
        item_disabled: P::Galaxy.color(),
        indicator: P::Gold.color(),
        breadcrumb: P::Sage.color(),
    },
    status: StatusColors {
        info: P::BigBlue.color(),
        info_light: P::Sage.color(),
        success: P::Green.color(),
        success_light: P::Bluey.color(),
        warning: P::Gold.color(),
        warning_light: P::Butterscotch.color(),
        warning_critical: P::Mango.color(),
        error: P::Tamarillo.color(),
        error_light: P::Brick.color(),
        error_critical: P::Rust.color(),
        neutral: P::Galaxy.color(),
    },
    content: ContentColors {
        primary: P::Sage.color(),
        secondary: P::Purple.color(),
        tertiary: P::Galaxy.color(),
        inverse: P::SpaceWhite.color(),
        link: P::Violet.color(),
        link_hover: P::AfricanViolet.color(),
        link_visited: P::Purple.color(),
        code: P::Green.color(),
        heading: P::BigBlue.color(),
    },
    background: BackgroundColors {
        base: Color::from_static("#000000"),
        elevated: Color::from_static("#0a0a11"),
        elevated_higher: Color::from_static("#1a1a22"),
        depressed: Color::from_static("#000022"),
        overlay: Color::from_static("rgba(0, 0, 0, 0.85)"),
        stripe: Color::from_static("#080810"),
    },
    data: DataColors {
        series1: P::Mango.color(),
        series2: P::BigBlue.color(),
        series3: P::Purple.color(),
        series4: P::Gold.color(),
        series5: P::Green.color(),
        positive: P::Green.color(),
        negative: P::Tamarillo.color(),
        neutral: P::Galaxy.color(),
    },
    decorative: DecorativeColors {
        sweep: P::BigBlue.color(),
        elbow: P::Purple.color(),
        pill: P::Mango.color(),
        bracket: P::Galaxy.color(),
        terminal: P::Green.color(),
        hologram: P::Sage.color(),
        alert: P::Rust.color(),
        caution: P::Gold.color(),
    },
    interface: Some(InterfaceColors {
        active: P::Green.color(),
        inactive: P::Galaxy.color(),
        hover: P::Violet.color(),
        pressed: P::AfricanViolet.color(),
    }),
    system: Some(SystemColors {
        success: P::Green.color(),
        warning: P::Gold.color(),
        error: P::Tamarillo.color(),
        info: P::BigBlue.color(),
    }),
};

/// High-contrast blue and gold.
pub static DISCOVERY: SemanticColors = SemanticColors {
    frame: FrameColors {
        primary: P::Pacific.color(),
        secondary: P::Ocean.color(),
        accent: P::Gold.color(),
        divider: P::Twilight.color(),
        corner: P::Pacific.color(),
        sidebar: P::Ocean.color(),
        topbar: P::Pacific.color(),
    },
    action: ActionColors {
        primary: P::Gold.color(),
        primary_hover: P::Sunflower.color(),
        primary_active: P::Dandelion.color(),
        secondary: P::Pacific.color(),
        secondary_hover: P::Bluey.color(),
        secondary_active: P::Ocean.color(),
        disabled: P::TextBlock.color(),
        focus: P::GoldPressedLatinum.color(),
    },
    navigation: NavigationColors {
        item: P::Pacific.color(),
        item_hover: P::Bluey.color(),
        item_active: P::Gold.color(),
        item_disabled: P::TextBlock.color(),
        indicator: P::GoldPressedLatinum.color(),
        breadcrumb: P::Sky.color(),
    },
    status: StatusColors {
        info: P::Pacific.color(),
        info_light: P::Sky.color(),
        success: P::Green.color(),
        success_light: P::Bluey.color(),
        warning: P::Sunflower.color(),
        warning_light: P::Candlelight.color(),
        warning_critical: P::Gold.color(),
        error: P::Tomato.color(),
        error_light: P::AlmondCreme.color(),
        error_critical: P::Mars.color(),
        neutral: P::TextBlock.color(),
    },
    content: ContentColors {
        primary: P::Sky.color(),
        secondary: P::Pacific.color(),
        tertiary: P::Sage.color(),
        inverse: P::SpaceWhite.color(),
        link: P::Gold.color(),
        link_hover: P::GoldPressedLatinum.color(),
        link_visited: P::Sunflower.color(),
        code: P::Green.color(),
        heading: P::Pacific.color(),
    },
    background: BackgroundColors {
        base: Color::from_static("#000000"),
        elevated: Color::from_static("#001122"),
        elevated_higher: Color::from_static("#002244"),
        depressed: Color::from_static("#000011"),
        overlay: Color::from_static("rgba(0, 0, 17, 0.9)"),
        stripe: Color::from_static("#000a14"),
    },
    data: DataColors {
        series1: P::Gold.color(),
        series2: P::Pacific.color(),
        series3: P::Green.color(),
        series4: P::Tomato.color(),
        series5: P::Violet.color(),
        positive: P::Green.color(),
        negative: P::Tomato.color(),
        neutral: P::TextBlock.color(),
    },
    decorative: DecorativeColors {
        sweep: P::Pacific.color(),
        elbow: P::Ocean.color(),
        pill: P::Gold.color(),
        bracket: P::Twilight.color(),
        terminal: P::Green.color(),
        hologram: P::GoldPressedLatinum.color(),
        alert: P::Tomato.color(),
        caution: P::Sunflower.color(),
    },
    interface: Some(InterfaceColors {
        active: P::Green.color(),
        inactive: P::TextBlock.color(),
        hover: P::Bluey.color(),
        pressed: P::Ocean.color(),
    }),
    system: Some(SystemColors {
        success: P::Green.color(),
        warning: P::Sunflower.color(),
        error: P::Tomato.color(),
        info: P::Pacific.color(),
    }),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::{FrameSlot, StatusSlot};

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(VariantName::resolve("voyager"), VariantName::Voyager);
        assert_eq!(VariantName::resolve("tng"), VariantName::Tng);
        assert_eq!(VariantName::resolve("ds9"), VariantName::Ds9);
        assert_eq!(VariantName::resolve("discovery"), VariantName::Discovery);
        assert_eq!(VariantName::resolve("custom"), VariantName::Custom);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        assert_eq!(VariantName::resolve("klingon"), VariantName::Voyager);
        assert_eq!(VariantName::resolve(""), VariantName::Voyager);
        assert_eq!(VariantName::resolve("Voyager"), VariantName::Voyager);
    }

    #[test]
    fn test_as_str_round_trips() {
        for v in VariantName::BUILTIN {
            assert_eq!(VariantName::resolve(v.as_str()), *v);
        }
    }

    #[test]
    fn test_variant_colors_known() {
        assert_eq!(
            variant_colors("voyager").frame.primary.as_str(),
            "#2255FF"
        );
        assert_eq!(variant_colors("tng").frame.primary.as_str(), "#FF9900");
        assert_eq!(variant_colors("ds9").frame.primary.as_str(), "#6666FF");
        assert_eq!(
            variant_colors("discovery").frame.primary.as_str(),
            "#0088FF"
        );
    }

    #[test]
    fn test_variant_colors_unknown_is_default() {
        assert_eq!(variant_colors("romulan"), variant_colors("voyager"));
        // "custom" has no registry entry either.
        assert_eq!(variant_colors("custom"), variant_colors("voyager"));
    }

    #[test]
    fn test_every_builtin_answers_every_path() {
        for v in VariantName::BUILTIN {
            let colors = builtin_colors(*v);
            for path in SemanticPath::all() {
                // A complete mapping returns a parseable color for any path.
                colors.get(path).channels().unwrap_or_else(|e| {
                    panic!("variant '{}', path '{}': {}", v, path, e)
                });
            }
        }
    }

    #[test]
    fn test_builtins_carry_deprecated_categories() {
        for v in VariantName::BUILTIN {
            let colors = builtin_colors(*v);
            assert!(colors.interface.is_some(), "variant '{}'", v);
            assert!(colors.system.is_some(), "variant '{}'", v);
        }
    }

    #[test]
    fn test_mapping_builtin_is_total() {
        let mapping = SemanticMapping::Builtin(&VOYAGER);
        for path in SemanticPath::all() {
            assert!(mapping.get(path).is_some());
        }
    }

    #[test]
    fn test_mapping_custom_is_partial() {
        let mapping = SemanticMapping::custom(CustomColors::default());
        assert_eq!(mapping.get(SemanticPath::Frame(FrameSlot::Primary)), None);
        assert!(mapping.interface().is_none());
        assert!(mapping.system().is_none());
    }

    #[test]
    fn test_voyager_success_is_green() {
        assert_eq!(
            VOYAGER.get(SemanticPath::Status(StatusSlot::Success)).as_str(),
            "#33CC99"
        );
    }
}
