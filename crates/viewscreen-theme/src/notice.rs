//! Observability notices for resolution and migration events.
//!
//! Color resolution never fails the caller; anything that goes wrong is
//! reported here instead, as a [`ThemeNotice`] delivered to a process-wide
//! sink. The default sink writes to stderr. Override it for testing or to
//! route notices into a host application's own logging with
//! [`set_notice_sink`]:
//!
//! ```rust
//! use viewscreen_theme::set_notice_sink;
//!
//! // Silence notices entirely
//! set_notice_sink(|_notice| {});
//!
//! // Restore the default stderr sink
//! set_notice_sink(viewscreen_theme::stderr_notice_sink);
//! ```

use std::fmt;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::semantic::SemanticPath;

/// An observability event emitted by the engine.
///
/// Notices are informational; by the time one is emitted the operation
/// that triggered it has already recovered (fallback color, dedup skip).
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeNotice {
    /// A path string failed to resolve and the fallback color was used.
    InvalidPath {
        /// The path as the caller supplied it.
        path: String,
        /// What went wrong (parse failure, unbound custom slot).
        detail: String,
    },
    /// A color name matched nothing at all; the fallback color was used.
    UnknownColor {
        /// The name as the caller supplied it.
        name: String,
    },
    /// A deprecated color name was used for the first time in its context.
    Deprecation {
        /// The deprecated name.
        name: String,
        /// Calling context, if the caller supplied one.
        context: Option<String>,
        /// Suggested semantic replacements, most-preferred first.
        suggestions: Vec<SemanticPath>,
    },
}

impl fmt::Display for ThemeNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeNotice::InvalidPath { path, detail } => {
                write!(
                    f,
                    "invalid semantic color path '{}' ({}); using fallback color",
                    path, detail
                )
            }
            ThemeNotice::UnknownColor { name } => {
                write!(f, "unknown color '{}'; using fallback color", name)
            }
            ThemeNotice::Deprecation {
                name,
                context,
                suggestions,
            } => {
                write!(f, "deprecated color '{}'", name)?;
                if let Some(ctx) = context {
                    write!(f, " used in {}", ctx)?;
                }
                write!(
                    f,
                    "; appearance-based names will be removed in a future version"
                )?;
                if !suggestions.is_empty() {
                    write!(f, "; consider instead:")?;
                    for s in suggestions {
                        write!(f, " {}", s)?;
                    }
                }
                Ok(())
            }
        }
    }
}

type NoticeSink = fn(&ThemeNotice);

static NOTICE_SINK: Lazy<Mutex<NoticeSink>> = Lazy::new(|| Mutex::new(stderr_notice_sink));

/// The default sink: one line per notice on stderr.
pub fn stderr_notice_sink(notice: &ThemeNotice) {
    eprintln!("[viewscreen] {}", notice);
}

/// Overrides the sink that receives [`ThemeNotice`] events.
///
/// The sink is process-wide; tests that install one should run serially.
pub fn set_notice_sink(sink: fn(&ThemeNotice)) {
    let mut guard = NOTICE_SINK.lock().unwrap();
    *guard = sink;
}

/// Delivers a notice to the configured sink.
pub(crate) fn emit(notice: ThemeNotice) {
    let sink = *NOTICE_SINK.lock().unwrap();
    sink(&notice);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::{ContentSlot, FrameSlot};
    use serial_test::serial;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RECEIVED: AtomicUsize = AtomicUsize::new(0);

    #[test]
    #[serial]
    fn test_sink_receives_notices() {
        RECEIVED.store(0, Ordering::SeqCst);
        set_notice_sink(|_| {
            RECEIVED.fetch_add(1, Ordering::SeqCst);
        });

        emit(ThemeNotice::UnknownColor {
            name: "chartreuse".to_string(),
        });
        emit(ThemeNotice::InvalidPath {
            path: "status.bogus".to_string(),
            detail: "unknown slot".to_string(),
        });

        assert_eq!(RECEIVED.load(Ordering::SeqCst), 2);
        set_notice_sink(stderr_notice_sink);
    }

    #[test]
    fn test_invalid_path_display() {
        let notice = ThemeNotice::InvalidPath {
            path: "status.bogus".to_string(),
            detail: "unknown slot 'bogus' in semantic category 'status'".to_string(),
        };
        let msg = notice.to_string();
        assert!(msg.contains("status.bogus"));
        assert!(msg.contains("fallback"));
    }

    #[test]
    fn test_deprecation_display_lists_suggestions() {
        let notice = ThemeNotice::Deprecation {
            name: "evening".to_string(),
            context: Some("Sidebar".to_string()),
            suggestions: vec![
                SemanticPath::Frame(FrameSlot::Primary),
                SemanticPath::Content(ContentSlot::Heading),
            ],
        };
        let msg = notice.to_string();
        assert!(msg.contains("evening"));
        assert!(msg.contains("Sidebar"));
        assert!(msg.contains("frame.primary"));
        assert!(msg.contains("content.heading"));
    }

    #[test]
    fn test_deprecation_display_without_context() {
        let notice = ThemeNotice::Deprecation {
            name: "main".to_string(),
            context: None,
            suggestions: vec![],
        };
        let msg = notice.to_string();
        assert!(msg.contains("main"));
        assert!(!msg.contains("used in"));
    }
}
