//! # Viewscreen Theme - Semantic Color Engine
//!
//! `viewscreen-theme` is the color-token engine behind the viewscreen
//! decorative UI skin. It maps an atomic palette of named colors onto
//! purpose-driven semantic roles, ships several named presets
//! ("variants"), and keeps older appearance-based color names resolving
//! through a migration bridge while nudging callers toward semantic
//! paths.
//!
//! ## Core Concepts
//!
//! - [`PaletteColor`]: the flat set of named atomic color values
//! - [`SemanticPath`]: a typed `category.slot` role such as `status.success`
//! - [`VariantName`]: preset selection (`voyager`, `tng`, `ds9`,
//!   `discovery`, `custom`)
//! - [`Theme`]: an immutable composed snapshot of mapping + configuration
//! - [`ThemeController`]: session state; switching variants recomposes
//! - [`ThemeNotice`]: the observability channel for fail-soft resolution
//!
//! ## Quick Start
//!
//! ```rust
//! use viewscreen_theme::ThemeController;
//!
//! let mut controller = ThemeController::new();
//!
//! // Components ask for roles, not colors.
//! let success = controller.resolve("status.success");
//! assert_eq!(success.as_str(), "#33CC99");
//!
//! // Switching variants rebinds every role.
//! controller.switch_variant("tng");
//! assert_eq!(controller.resolve("frame.primary").as_str(), "#FF9900");
//! ```
//!
//! ## Fail-Soft Resolution
//!
//! Resolution never fails the caller. An invalid path degrades to the
//! active `frame.primary` value and reports a [`ThemeNotice`] instead;
//! an unknown variant name silently falls back to the default preset.
//!
//! ```rust
//! use viewscreen_theme::{compose_theme, resolve_path, ThemeConfig};
//!
//! let theme = compose_theme(&ThemeConfig::default(), "voyager", None);
//! assert_eq!(resolve_path(&theme, "status.bogus").as_str(), "#2255FF");
//! ```
//!
//! ## Custom Variants from YAML
//!
//! Custom mappings are partial; unbound slots degrade at resolution
//! time rather than failing construction.
//!
//! ```rust
//! use viewscreen_theme::{CustomColors, ThemeController};
//!
//! let custom = CustomColors::from_yaml(r##"
//! frame:
//!   primary: "#FF6600"
//! status:
//!   success: "#00CC66"
//! "##).unwrap();
//!
//! let mut controller = ThemeController::new();
//! controller.set_custom_colors(custom);
//! assert_eq!(controller.resolve("status.success").as_str(), "#00CC66");
//! ```
//!
//! ## Legacy Color Names
//!
//! Pre-semantic call sites keep working: the three historical slot names
//! and every appearance-based palette name resolve through
//! [`ThemeController::color`], with a one-time deprecation notice per
//! (name, calling context) suggesting semantic replacements.
//!
//! ```rust
//! use viewscreen_theme::ThemeController;
//!
//! let controller = ThemeController::new();
//! let main = controller.color("main", Some("Frame"));
//! assert_eq!(main, controller.resolve("frame.primary"));
//! ```

mod color;
mod compose;
mod config;
mod error;
mod migration;
mod notice;
mod palette;
mod resolve;
mod semantic;
mod state;
mod variant;

pub use color::{Color, Rgba};
pub use compose::{compose_theme, LegacyColors, Theme};
pub use config::{
    BorderConfig, BorderConfigPatch, FontSizeScale, FontSizeScalePatch, FrameConfig,
    FrameConfigPatch, SizeScale, SizeScalePatch, SpacingConfig, SpacingConfigPatch, ThemeConfig,
    ThemeConfigPatch, TypographyConfig, TypographyConfigPatch,
};
pub use error::{ColorError, DefinitionError, PathError};
pub use migration::{
    is_deprecated, migrate_at_runtime, suggest, suggestions, DeprecationTracker, LEGACY_NAMES,
};
pub use notice::{set_notice_sink, stderr_notice_sink, ThemeNotice};
pub use palette::PaletteColor;
pub use resolve::{is_valid_path, resolve_many, resolve_path};
pub use semantic::{
    ActionColors, ActionSlot, BackgroundColors, BackgroundSlot, ContentColors, ContentSlot,
    CustomActionColors, CustomBackgroundColors, CustomColors, CustomContentColors,
    CustomDataColors, CustomDecorativeColors, CustomFrameColors, CustomNavigationColors,
    CustomStatusColors, DataColors, DataSlot, DecorativeColors, DecorativeSlot, FrameColors,
    FrameSlot, InterfaceColors, NavigationColors, NavigationSlot, SemanticCategory,
    SemanticColors, SemanticPath, StatusColors, StatusSlot, SystemColors,
};
pub use state::ThemeController;
pub use variant::{
    builtin_colors, variant_colors, SemanticMapping, VariantName, DISCOVERY, DS9, TNG, VOYAGER,
};
