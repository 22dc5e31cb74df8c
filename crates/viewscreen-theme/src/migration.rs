//! The legacy-to-semantic compatibility bridge.
//!
//! Older call sites name colors by appearance (`evening`, `honey`) or by
//! the three historical slot names (`main`, `alt1`, `alt2`). This module
//! keeps those names resolving while nudging callers toward semantic
//! paths: every deprecated name carries an ordered list of suggested
//! replacements, a one-time-per-context deprecation notice is emitted on
//! use, and [`migrate_at_runtime`] resolves the name through its first
//! suggestion so old code keeps tracking the active variant.
//!
//! # Example
//!
//! ```rust
//! use viewscreen_theme::{is_deprecated, suggest, DeprecationTracker};
//!
//! assert!(is_deprecated("evening"));
//! assert!(!is_deprecated("frame.primary"));
//!
//! let suggestions = suggest("evening", None);
//! assert_eq!(suggestions[0].to_string(), "frame.primary");
//!
//! let tracker = DeprecationTracker::new();
//! assert!(tracker.warn_once("evening", Some("Sidebar")));
//! assert!(!tracker.warn_once("evening", Some("Sidebar")));
//! ```

use std::collections::HashSet;
use std::sync::Mutex;

use crate::color::Color;
use crate::notice::{self, ThemeNotice};
use crate::semantic::{
    ActionSlot, ContentSlot, DataSlot, DecorativeSlot, FrameSlot, NavigationSlot,
    SemanticCategory, SemanticPath as SP, SemanticPath, StatusSlot,
};
use crate::variant::SemanticMapping;

/// The three historical slot names that predate the palette itself.
pub const LEGACY_NAMES: &[&str] = &["main", "alt1", "alt2"];

/// Deprecated name to suggested semantic replacements, most-preferred
/// first. Suggestions are typed paths, so the table cannot drift from the
/// schema.
static MIGRATION_MAP: &[(&str, &[SemanticPath])] = &[
    ("main", &[SP::Frame(FrameSlot::Primary), SP::Content(ContentSlot::Heading)]),
    ("alt1", &[SP::Frame(FrameSlot::Accent), SP::Action(ActionSlot::Secondary)]),
    ("alt2", &[SP::Frame(FrameSlot::Secondary), SP::Navigation(NavigationSlot::Item)]),
    ("evening", &[SP::Frame(FrameSlot::Primary), SP::Content(ContentSlot::Heading)]),
    ("midnight", &[SP::Frame(FrameSlot::Divider), SP::Decorative(DecorativeSlot::Bracket)]),
    ("cool", &[SP::Frame(FrameSlot::Secondary), SP::Status(StatusSlot::Info)]),
    ("honey", &[SP::Frame(FrameSlot::Accent), SP::Navigation(NavigationSlot::Indicator)]),
    ("cardinal", &[SP::Status(StatusSlot::Error), SP::Decorative(DecorativeSlot::Alert)]),
    ("tangerine", &[SP::Status(StatusSlot::Warning), SP::Decorative(DecorativeSlot::Caution)]),
    ("green", &[SP::Status(StatusSlot::Success), SP::Action(ActionSlot::PrimaryActive)]),
    ("galaxy", &[SP::Navigation(NavigationSlot::ItemDisabled), SP::Action(ActionSlot::Disabled)]),
    ("ghost", &[SP::Content(ContentSlot::Primary)]),
    ("moonshine", &[SP::Content(ContentSlot::Inverse)]),
    ("orange", &[SP::Action(ActionSlot::Primary), SP::Data(DataSlot::Series1)]),
    ("mango", &[SP::Action(ActionSlot::PrimaryHover), SP::Decorative(DecorativeSlot::Pill)]),
    ("lilac", &[SP::Action(ActionSlot::Secondary), SP::Navigation(NavigationSlot::Item)]),
    ("purple", &[SP::Action(ActionSlot::SecondaryHover), SP::Data(DataSlot::Series4)]),
    ("brick", &[SP::Status(StatusSlot::ErrorLight)]),
    ("paleBlue", &[SP::Content(ContentSlot::LinkVisited), SP::Action(ActionSlot::PrimaryActive)]),
    ("skyBlue", &[SP::Content(ContentSlot::Link), SP::Action(ActionSlot::Focus)]),
    ("bigBlue", &[SP::Content(ContentSlot::LinkHover), SP::Decorative(DecorativeSlot::Sweep)]),
    ("gray", &[SP::Action(ActionSlot::Disabled), SP::Status(StatusSlot::Neutral)]),
];

/// Returns the raw suggestion list for a deprecated name.
///
/// Empty for names with no migration entry.
pub fn suggestions(name: &str) -> &'static [SemanticPath] {
    MIGRATION_MAP
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, paths)| *paths)
        .unwrap_or(&[])
}

/// True if `name` is a legacy slot name or an appearance-based palette
/// name with a migration entry.
pub fn is_deprecated(name: &str) -> bool {
    LEGACY_NAMES.contains(&name) || MIGRATION_MAP.iter().any(|(n, _)| *n == name)
}

/// Returns ranked suggestions for `name`, optionally narrowed to one
/// category.
///
/// When `context` is supplied the list is filtered to suggestions in that
/// category; if the filter leaves nothing, the unfiltered list comes back
/// so the caller always gets the best available guidance.
pub fn suggest(name: &str, context: Option<SemanticCategory>) -> Vec<SemanticPath> {
    let all = suggestions(name);
    if let Some(category) = context {
        let filtered: Vec<SemanticPath> = all
            .iter()
            .copied()
            .filter(|s| s.category() == category)
            .collect();
        if !filtered.is_empty() {
            return filtered;
        }
    }
    all.to_vec()
}

/// Resolves a possibly-deprecated name against a semantic mapping.
///
/// A name that already looks like a semantic path resolves directly
/// (`None` if it does not parse or the slot is unbound). A deprecated
/// name resolves through its first suggestion. Anything else is `None`;
/// callers fall back to the flattened legacy table from there.
pub fn migrate_at_runtime(name: &str, mapping: &SemanticMapping) -> Option<Color> {
    if name.contains('.') {
        return name
            .parse::<SemanticPath>()
            .ok()
            .and_then(|path| mapping.get(path).cloned());
    }

    suggestions(name)
        .first()
        .and_then(|path| mapping.get(*path).cloned())
}

/// Append-only dedup store for deprecation notices.
///
/// One notice per (name, context) pair for the tracker's lifetime; the
/// set only grows. Owned by the state controller rather than living as a
/// process global, so independent engines and tests get independent
/// warning state. Two threads racing on the same key may both emit (the
/// lock makes the set itself safe); at-least-once is the contract.
#[derive(Debug, Default)]
pub struct DeprecationTracker {
    seen: Mutex<HashSet<(String, String)>>,
}

impl DeprecationTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a deprecation notice for `name` unless this (name, context)
    /// pair already warned. Returns whether a notice was emitted.
    ///
    /// A missing context dedups under `"unknown"`. When the context names
    /// a semantic category, the notice's suggestions are narrowed to it.
    pub fn warn_once(&self, name: &str, context: Option<&str>) -> bool {
        let key = (
            name.to_string(),
            context.unwrap_or("unknown").to_string(),
        );

        let mut seen = self.seen.lock().unwrap();
        if !seen.insert(key) {
            return false;
        }
        drop(seen);

        let category = context.and_then(SemanticCategory::from_name);
        notice::emit(ThemeNotice::Deprecation {
            name: name.to_string(),
            context: context.map(str::to_string),
            suggestions: suggest(name, category),
        });
        true
    }

    /// Number of distinct (name, context) pairs warned so far.
    pub fn warned_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{set_notice_sink, stderr_notice_sink};
    use crate::semantic::CustomColors;
    use crate::variant::VOYAGER;
    use serial_test::serial;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // =========================================================================
    // Classification and suggestions
    // =========================================================================

    #[test]
    fn test_is_deprecated() {
        for name in ["main", "alt1", "alt2", "evening", "gray", "paleBlue"] {
            assert!(is_deprecated(name), "{}", name);
        }
        assert!(!is_deprecated("frame.primary"));
        assert!(!is_deprecated("wisteria")); // palette name without an entry
        assert!(!is_deprecated(""));
    }

    #[test]
    fn test_suggestions_are_ranked() {
        let s = suggestions("evening");
        assert_eq!(s[0], SP::Frame(FrameSlot::Primary));
        assert_eq!(s[1], SP::Content(ContentSlot::Heading));
        assert!(suggestions("wisteria").is_empty());
    }

    #[test]
    fn test_suggest_filters_by_context() {
        let filtered = suggest("green", Some(SemanticCategory::Action));
        assert_eq!(filtered, vec![SP::Action(ActionSlot::PrimaryActive)]);
    }

    #[test]
    fn test_suggest_falls_back_when_filter_empty() {
        // "ghost" only suggests content paths; a frame context matches
        // nothing and the full list comes back.
        let fallback = suggest("ghost", Some(SemanticCategory::Frame));
        assert_eq!(fallback, vec![SP::Content(ContentSlot::Primary)]);
    }

    #[test]
    fn test_legacy_names_have_entries() {
        for name in LEGACY_NAMES {
            assert!(!suggestions(name).is_empty(), "{}", name);
        }
    }

    // =========================================================================
    // Runtime migration
    // =========================================================================

    #[test]
    fn test_migrate_semantic_path_resolves_directly() {
        let mapping = SemanticMapping::Builtin(&VOYAGER);
        let color = migrate_at_runtime("status.success", &mapping).unwrap();
        assert_eq!(color.as_str(), "#33CC99");
    }

    #[test]
    fn test_migrate_bad_path_is_none() {
        let mapping = SemanticMapping::Builtin(&VOYAGER);
        assert_eq!(migrate_at_runtime("status.bogus", &mapping), None);
        assert_eq!(migrate_at_runtime("a.b.c", &mapping), None);
    }

    #[test]
    fn test_migrate_deprecated_name_follows_first_suggestion() {
        let mapping = SemanticMapping::Builtin(&VOYAGER);
        // "main" suggests frame.primary first.
        let color = migrate_at_runtime("main", &mapping).unwrap();
        assert_eq!(color.as_str(), "#2255FF");
        // "green" suggests status.success first.
        let color = migrate_at_runtime("green", &mapping).unwrap();
        assert_eq!(color.as_str(), "#33CC99");
    }

    #[test]
    fn test_migrate_unknown_name_is_none() {
        let mapping = SemanticMapping::Builtin(&VOYAGER);
        assert_eq!(migrate_at_runtime("wisteria", &mapping), None);
        assert_eq!(migrate_at_runtime("warpcore", &mapping), None);
    }

    #[test]
    fn test_migrate_against_partial_custom_mapping() {
        let mapping = SemanticMapping::custom(CustomColors::default());
        // Suggestion exists but the slot is unbound.
        assert_eq!(migrate_at_runtime("main", &mapping), None);
    }

    // =========================================================================
    // Warn-once tracking
    // =========================================================================

    static DEPRECATIONS: AtomicUsize = AtomicUsize::new(0);

    fn counting_sink(notice: &ThemeNotice) {
        if matches!(notice, ThemeNotice::Deprecation { .. }) {
            DEPRECATIONS.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    #[serial]
    fn test_warn_once_dedups_per_name_and_context() {
        DEPRECATIONS.store(0, Ordering::SeqCst);
        set_notice_sink(counting_sink);

        let tracker = DeprecationTracker::new();
        assert!(tracker.warn_once("evening", Some("Sidebar")));
        assert!(!tracker.warn_once("evening", Some("Sidebar")));
        assert!(!tracker.warn_once("evening", Some("Sidebar")));
        // A different context warns again.
        assert!(tracker.warn_once("evening", Some("TopBar")));
        // A different name warns again.
        assert!(tracker.warn_once("honey", Some("Sidebar")));

        assert_eq!(DEPRECATIONS.load(Ordering::SeqCst), 3);
        assert_eq!(tracker.warned_count(), 3);
        set_notice_sink(stderr_notice_sink);
    }

    #[test]
    #[serial]
    fn test_warn_once_missing_context_dedups_as_unknown() {
        DEPRECATIONS.store(0, Ordering::SeqCst);
        set_notice_sink(counting_sink);

        let tracker = DeprecationTracker::new();
        assert!(tracker.warn_once("main", None));
        assert!(!tracker.warn_once("main", None));
        // "unknown" is the literal dedup bucket for a missing context.
        assert!(!tracker.warn_once("main", Some("unknown")));

        assert_eq!(DEPRECATIONS.load(Ordering::SeqCst), 1);
        set_notice_sink(stderr_notice_sink);
    }

    #[test]
    #[serial]
    fn test_trackers_are_independent() {
        DEPRECATIONS.store(0, Ordering::SeqCst);
        set_notice_sink(counting_sink);

        let a = DeprecationTracker::new();
        let b = DeprecationTracker::new();
        assert!(a.warn_once("main", None));
        // A fresh tracker has its own empty state.
        assert!(b.warn_once("main", None));

        assert_eq!(DEPRECATIONS.load(Ordering::SeqCst), 2);
        set_notice_sink(stderr_notice_sink);
    }
}
