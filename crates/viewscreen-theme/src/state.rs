//! Session-scoped theme state: the active variant and custom mapping.
//!
//! [`ThemeController`] is what a host embeds. It holds the selection state
//! (variant name, optional custom mapping, configuration) and the current
//! composed [`Theme`] snapshot; every transition recomposes a fresh
//! snapshot through [`compose_theme`]. The controller also owns the
//! deprecation tracker, so independent controllers warn independently.
//!
//! # Example
//!
//! ```rust
//! use viewscreen_theme::ThemeController;
//!
//! let mut controller = ThemeController::new();
//! assert_eq!(controller.resolve("frame.primary").as_str(), "#2255FF");
//!
//! controller.switch_variant("tng");
//! assert_eq!(controller.resolve("frame.primary").as_str(), "#FF9900");
//!
//! // Legacy names resolve through the migration bridge.
//! let main = controller.color("main", Some("Frame"));
//! assert_eq!(main.as_str(), "#FF9900");
//! ```

use crate::color::Color;
use crate::compose::{compose_theme, Theme};
use crate::config::{ThemeConfig, ThemeConfigPatch};
use crate::migration::{is_deprecated, migrate_at_runtime, DeprecationTracker};
use crate::notice::{self, ThemeNotice};
use crate::resolve::resolve_path;
use crate::semantic::CustomColors;
use crate::variant::VariantName;

/// Owns the theme selection state and the current composed snapshot.
///
/// Starts at the default variant with no custom mapping. Lives for the
/// duration of the owning scope; there is no terminal state.
#[derive(Debug)]
pub struct ThemeController {
    config: ThemeConfig,
    variant: VariantName,
    custom: Option<CustomColors>,
    theme: Theme,
    tracker: DeprecationTracker,
}

impl ThemeController {
    /// Creates a controller with the default configuration and variant.
    pub fn new() -> Self {
        Self::with_config(ThemeConfig::default())
    }

    /// Creates a controller with a custom base configuration.
    pub fn with_config(config: ThemeConfig) -> Self {
        let theme = compose_theme(&config, VariantName::DEFAULT.as_str(), None);
        ThemeController {
            config,
            variant: VariantName::DEFAULT,
            custom: None,
            theme,
            tracker: DeprecationTracker::new(),
        }
    }

    /// The current composed snapshot.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The active variant identifier.
    pub fn variant(&self) -> VariantName {
        self.variant
    }

    /// The controller's deprecation dedup store.
    pub fn tracker(&self) -> &DeprecationTracker {
        &self.tracker
    }

    /// Switches the active variant and recomposes.
    ///
    /// Unknown names fall back to the default variant. Switching to any
    /// non-custom variant discards a stored custom mapping; it is not
    /// preserved for a later return to `custom`.
    pub fn switch_variant(&mut self, name: &str) {
        self.variant = VariantName::resolve(name);
        if self.variant != VariantName::Custom {
            self.custom = None;
        }
        self.recompose();
    }

    /// Installs a custom mapping, forces the variant to `custom`, and
    /// recomposes. The mapping is taken as-is; unbound slots degrade at
    /// resolution time.
    pub fn set_custom_colors(&mut self, mapping: CustomColors) {
        self.custom = Some(mapping);
        self.variant = VariantName::Custom;
        self.recompose();
    }

    /// Applies a configuration patch over the current base and
    /// recomposes. Variant selection is unaffected.
    pub fn apply_config_patch(&mut self, patch: &ThemeConfigPatch) {
        self.config = self.config.merged(patch);
        self.recompose();
    }

    /// Resolves a semantic path against the current snapshot.
    ///
    /// Shorthand for [`resolve_path`] on [`theme`](Self::theme).
    pub fn resolve(&self, path: &str) -> Color {
        resolve_path(&self.theme, path)
    }

    /// The legacy-aware color lookup older call sites go through.
    ///
    /// A semantic path resolves directly. A deprecated name warns once
    /// per (name, context), then resolves through its migration entry,
    /// then through the flattened legacy table. Anything still unresolved
    /// yields the fallback color with an [`ThemeNotice::UnknownColor`].
    pub fn color(&self, name: &str, context: Option<&str>) -> Color {
        if name.contains('.') {
            return resolve_path(&self.theme, name);
        }

        if is_deprecated(name) {
            self.tracker.warn_once(name, context);
            if let Some(color) = migrate_at_runtime(name, &self.theme.semantic) {
                return color;
            }
        }

        if let Some(color) = self.theme.legacy_color(name) {
            return color;
        }

        notice::emit(ThemeNotice::UnknownColor {
            name: name.to_string(),
        });
        self.theme.fallback_color()
    }

    fn recompose(&mut self) {
        self.theme = compose_theme(&self.config, self.variant.as_str(), self.custom.as_ref());
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new()
    }
}
