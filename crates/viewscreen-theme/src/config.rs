//! Non-color theme configuration and typed patch merging.
//!
//! [`ThemeConfig`] carries the layout-adjacent values a skin needs beside
//! its colors: frame metrics, spacing scale, typography. Callers customize
//! it through [`ThemeConfigPatch`], a partial mirror where every field is
//! optional. Merging is typed and closed over this schema: composite nodes
//! merge field by field, every leaf is replaced wholesale. The font stack
//! is a leaf; a patch that supplies one replaces the whole list, it never
//! splices entries.
//!
//! # Example
//!
//! ```rust
//! use viewscreen_theme::{ThemeConfig, ThemeConfigPatch};
//!
//! let patch = ThemeConfigPatch::from_yaml(r#"
//! frame:
//!   border:
//!     width: 3
//! spacing:
//!   lg: 30
//! "#).unwrap();
//!
//! let config = ThemeConfig::default().merged(&patch);
//! assert_eq!(config.frame.border.width, 3);
//! assert_eq!(config.spacing.lg, 30);
//! // Untouched siblings survive the merge.
//! assert_eq!(config.frame.border.radius.md, 26);
//! assert_eq!(config.spacing.xs, 5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// A small/medium/large scale of numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeScale {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
}

/// Frame border metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderConfig {
    /// Corner radii per frame size.
    pub radius: SizeScale,
    /// Border stroke width.
    pub width: u32,
}

/// Frame geometry carried through to rendering unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Frame bar thickness per size.
    pub size: SizeScale,
    pub border: BorderConfig,
}

/// Spacing scale, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingConfig {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
}

/// Typography settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    /// Font stack, most-preferred first.
    pub font_family: Vec<String>,
    /// Font sizes as CSS length strings (e.g. `"1.35rem"`).
    pub font_size: FontSizeScale,
}

/// Font sizes per text size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizeScale {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

/// The complete non-color configuration of a theme.
///
/// Composed themes carry this through unchanged; it has no interaction
/// with variants or semantic mappings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub frame: FrameConfig,
    pub spacing: SpacingConfig,
    pub typography: TypographyConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            frame: FrameConfig {
                size: SizeScale {
                    sm: 16,
                    md: 100,
                    lg: 130,
                },
                border: BorderConfig {
                    radius: SizeScale {
                        sm: 20,
                        md: 26,
                        lg: 40,
                    },
                    width: 5,
                },
            },
            spacing: SpacingConfig {
                xs: 5,
                sm: 10,
                md: 15,
                lg: 25,
                xl: 50,
            },
            typography: TypographyConfig {
                font_family: vec![
                    "Antonio".to_string(),
                    "Arial Narrow".to_string(),
                    "Avenir Next Condensed".to_string(),
                    "sans-serif".to_string(),
                ],
                font_size: FontSizeScale {
                    sm: "0.88rem".to_string(),
                    md: "1.35rem".to_string(),
                    lg: "1.64rem".to_string(),
                },
            },
        }
    }
}

impl ThemeConfig {
    /// Returns a copy of this configuration with `patch` applied.
    ///
    /// Composite nodes merge recursively; leaves present in the patch
    /// replace the base value outright. An empty patch is the identity.
    pub fn merged(&self, patch: &ThemeConfigPatch) -> ThemeConfig {
        let mut merged = self.clone();
        patch.apply(&mut merged);
        merged
    }
}

/// Declares an all-`Option` patch struct plus its `apply` into the full
/// struct. A `leaf` field replaces the target wholesale; a `node` field
/// recurses into the target's own patch type.
macro_rules! patch_struct {
    ($(#[$meta:meta])* $name:ident for $target:ident {
        $(leaf $leaf:ident: $leaf_ty:ty,)*
        $(node $node:ident: $node_patch:ident,)*
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $leaf: Option<$leaf_ty>,
            )*
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $node: Option<$node_patch>,
            )*
        }

        impl $name {
            fn apply(&self, target: &mut $target) {
                $(
                    if let Some(value) = &self.$leaf {
                        target.$leaf = value.clone();
                    }
                )*
                $(
                    if let Some(patch) = &self.$node {
                        patch.apply(&mut target.$node);
                    }
                )*
            }
        }
    };
}

patch_struct! {
    /// Partial small/medium/large scale.
    SizeScalePatch for SizeScale {
        leaf sm: u32,
        leaf md: u32,
        leaf lg: u32,
    }
}

patch_struct! {
    /// Partial border metrics.
    BorderConfigPatch for BorderConfig {
        leaf width: u32,
        node radius: SizeScalePatch,
    }
}

patch_struct! {
    /// Partial frame geometry.
    FrameConfigPatch for FrameConfig {
        node size: SizeScalePatch,
        node border: BorderConfigPatch,
    }
}

patch_struct! {
    /// Partial spacing scale.
    SpacingConfigPatch for SpacingConfig {
        leaf xs: u32,
        leaf sm: u32,
        leaf md: u32,
        leaf lg: u32,
        leaf xl: u32,
    }
}

patch_struct! {
    /// Partial font sizes.
    FontSizeScalePatch for FontSizeScale {
        leaf sm: String,
        leaf md: String,
        leaf lg: String,
    }
}

patch_struct! {
    /// Partial typography settings. The font stack is one leaf: supplying
    /// it replaces the whole list.
    TypographyConfigPatch for TypographyConfig {
        leaf font_family: Vec<String>,
        node font_size: FontSizeScalePatch,
    }
}

patch_struct! {
    /// A partial [`ThemeConfig`], applied with [`ThemeConfig::merged`].
    ///
    /// Deserializes from YAML in the same nested shape the full
    /// configuration uses; absent fields leave the base value alone.
    ThemeConfigPatch for ThemeConfig {
        node frame: FrameConfigPatch,
        node spacing: SpacingConfigPatch,
        node typography: TypographyConfigPatch,
    }
}

impl ThemeConfigPatch {
    /// Parses a configuration patch from YAML content.
    ///
    /// # Errors
    ///
    /// Returns a [`DefinitionError`] if parsing fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, DefinitionError> {
        serde_yaml::from_str(yaml).map_err(|e| DefinitionError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Loads a configuration patch from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`DefinitionError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DefinitionError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        serde_yaml::from_str(&content).map_err(|e| DefinitionError::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }
}
