//! String-path color resolution against a composed theme.
//!
//! These are the entry points presentation code calls. Resolution is
//! fail-soft by policy: a bad path degrades to a safe, visible fallback
//! color and a [`ThemeNotice`](crate::ThemeNotice) on the sink, never an
//! error to the caller. A skin with one wrong color beats a skin that
//! refuses to render.
//!
//! # Example
//!
//! ```rust
//! use viewscreen_theme::{compose_theme, is_valid_path, resolve_path, ThemeConfig};
//!
//! let theme = compose_theme(&ThemeConfig::default(), "voyager", None);
//! assert_eq!(resolve_path(&theme, "status.success").as_str(), "#33CC99");
//! // Invalid paths degrade to frame.primary.
//! assert_eq!(resolve_path(&theme, "status.bogus").as_str(), "#2255FF");
//! assert!(!is_valid_path("status.bogus"));
//! ```

use std::collections::BTreeMap;

use crate::color::Color;
use crate::compose::Theme;
use crate::notice::{self, ThemeNotice};
use crate::semantic::SemanticPath;

/// Resolves a dotted `category.slot` path to a color.
///
/// On any failure (malformed path, unknown category or slot, unbound
/// custom slot) this returns the theme's fallback color and emits an
/// [`ThemeNotice::InvalidPath`]; it never panics and never fails the
/// caller.
pub fn resolve_path(theme: &Theme, path: &str) -> Color {
    match path.parse::<SemanticPath>() {
        Ok(parsed) => match theme.semantic(parsed) {
            Some(color) => color.clone(),
            None => {
                notice::emit(ThemeNotice::InvalidPath {
                    path: path.to_string(),
                    detail: "slot not bound by the custom mapping".to_string(),
                });
                theme.fallback_color()
            }
        },
        Err(err) => {
            notice::emit(ThemeNotice::InvalidPath {
                path: path.to_string(),
                detail: err.to_string(),
            });
            theme.fallback_color()
        }
    }
}

/// Resolves a whole name-to-path table at once, preserving keys.
///
/// Each entry goes through [`resolve_path`] independently; one invalid
/// path degrades that entry alone and the rest resolve normally.
pub fn resolve_many<K: Ord + Clone>(theme: &Theme, paths: &[(K, &str)]) -> BTreeMap<K, Color> {
    paths
        .iter()
        .map(|(key, path)| (key.clone(), resolve_path(theme, path)))
        .collect()
}

/// Tests whether `path` names a legal semantic slot.
///
/// Pure membership check against the schema; no notices, no fallback.
pub fn is_valid_path(path: &str) -> bool {
    path.parse::<SemanticPath>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_theme;
    use crate::config::ThemeConfig;
    use crate::notice::{set_notice_sink, stderr_notice_sink};
    use crate::semantic::{CustomColors, CustomStatusColors};
    use serial_test::serial;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static INVALID_PATHS: AtomicUsize = AtomicUsize::new(0);

    fn counting_sink(notice: &ThemeNotice) {
        if matches!(notice, ThemeNotice::InvalidPath { .. }) {
            INVALID_PATHS.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn voyager() -> Theme {
        compose_theme(&ThemeConfig::default(), "voyager", None)
    }

    #[test]
    fn test_resolve_valid_paths() {
        let theme = voyager();
        assert_eq!(resolve_path(&theme, "status.success").as_str(), "#33CC99");
        assert_eq!(resolve_path(&theme, "frame.primary").as_str(), "#2255FF");
        assert_eq!(
            resolve_path(&theme, "action.primaryHover").as_str(),
            "#FF9966"
        );
    }

    #[test]
    #[serial]
    fn test_invalid_path_falls_back_and_reports() {
        let theme = voyager();
        INVALID_PATHS.store(0, Ordering::SeqCst);
        set_notice_sink(counting_sink);

        assert_eq!(resolve_path(&theme, "status.bogus").as_str(), "#2255FF");
        assert_eq!(resolve_path(&theme, "not-a-path").as_str(), "#2255FF");
        assert_eq!(resolve_path(&theme, "a.b.c").as_str(), "#2255FF");

        assert_eq!(INVALID_PATHS.load(Ordering::SeqCst), 3);
        set_notice_sink(stderr_notice_sink);
    }

    #[test]
    #[serial]
    fn test_unbound_custom_slot_falls_back_and_reports() {
        let custom = CustomColors {
            status: CustomStatusColors {
                success: Some(Color::from_static("#00FF00")),
                ..Default::default()
            },
            ..Default::default()
        };
        let theme = compose_theme(&ThemeConfig::default(), "custom", Some(&custom));

        INVALID_PATHS.store(0, Ordering::SeqCst);
        set_notice_sink(counting_sink);

        // Bound slot resolves; everything else degrades to the fallback of
        // last resort (default variant frame.primary).
        assert_eq!(resolve_path(&theme, "status.success").as_str(), "#00FF00");
        assert_eq!(resolve_path(&theme, "status.error").as_str(), "#2255FF");

        assert_eq!(INVALID_PATHS.load(Ordering::SeqCst), 1);
        set_notice_sink(stderr_notice_sink);
    }

    #[test]
    fn test_resolve_many_preserves_keys_and_degrades_entrywise() {
        let theme = voyager();
        let resolved = resolve_many(
            &theme,
            &[
                ("ok", "status.success"),
                ("bad", "status.bogus"),
                ("frame", "frame.accent"),
            ],
        );

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved["ok"].as_str(), "#33CC99");
        assert_eq!(resolved["frame"].as_str(), "#FFCC99");
        // The invalid entry degrades alone.
        assert_eq!(resolved["bad"].as_str(), "#2255FF");
    }

    #[test]
    fn test_is_valid_path_matches_schema() {
        for path in SemanticPath::all() {
            assert!(is_valid_path(&path.to_string()));
        }
        assert!(!is_valid_path("status.bogus"));
        assert!(!is_valid_path("interface.active"));
        assert!(!is_valid_path("frame"));
        assert!(!is_valid_path(""));
    }

    #[test]
    fn test_every_valid_path_resolves_in_every_builtin() {
        for name in ["voyager", "tng", "ds9", "discovery"] {
            let theme = compose_theme(&ThemeConfig::default(), name, None);
            for path in SemanticPath::all() {
                let color = resolve_path(&theme, &path.to_string());
                color.channels().unwrap_or_else(|e| {
                    panic!("variant '{}', path '{}': {}", name, path, e)
                });
            }
        }
    }
}
