//! Semantic color schema: categories, slots, and typed paths.
//!
//! Components never ask for a palette color by appearance; they ask for a
//! role such as `status.success` or `action.primaryHover`. The schema fixes
//! the set of roles once, as Rust types: each category has a slot enum, and
//! [`SemanticPath`] is the sum of all (category, slot) pairs. String paths
//! are parsed into [`SemanticPath`] at the outer boundary only, so the
//! resolver, the validity check, and the schema can never drift apart.
//!
//! # Example
//!
//! ```rust
//! use viewscreen_theme::SemanticPath;
//!
//! let path: SemanticPath = "status.success".parse().unwrap();
//! assert_eq!(path.to_string(), "status.success");
//! assert!("status.bogus".parse::<SemanticPath>().is_err());
//! assert!("status.success.extra".parse::<SemanticPath>().is_err());
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{DefinitionError, PathError};

/// Declares a slot enum together with its string names and enumeration.
macro_rules! slots {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $lit:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every slot in this category, in schema order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the slot segment of the dotted path.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $lit),+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($lit => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

slots! {
    /// Structural frame elements (bars, corners, dividers).
    FrameSlot {
        Primary => "primary",
        Secondary => "secondary",
        Accent => "accent",
        Divider => "divider",
        Corner => "corner",
        Sidebar => "sidebar",
        Topbar => "topbar",
    }
}

slots! {
    /// Interactive controls and their interaction states.
    ActionSlot {
        Primary => "primary",
        PrimaryHover => "primaryHover",
        PrimaryActive => "primaryActive",
        Secondary => "secondary",
        SecondaryHover => "secondaryHover",
        SecondaryActive => "secondaryActive",
        Disabled => "disabled",
        Focus => "focus",
    }
}

slots! {
    /// Menu and navigation elements.
    NavigationSlot {
        Item => "item",
        ItemHover => "itemHover",
        ItemActive => "itemActive",
        ItemDisabled => "itemDisabled",
        Indicator => "indicator",
        Breadcrumb => "breadcrumb",
    }
}

slots! {
    /// Status and alert severities.
    StatusSlot {
        Info => "info",
        InfoLight => "infoLight",
        Success => "success",
        SuccessLight => "successLight",
        Warning => "warning",
        WarningLight => "warningLight",
        WarningCritical => "warningCritical",
        Error => "error",
        ErrorLight => "errorLight",
        ErrorCritical => "errorCritical",
        Neutral => "neutral",
    }
}

slots! {
    /// Text and typography roles.
    ContentSlot {
        Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Inverse => "inverse",
        Link => "link",
        LinkHover => "linkHover",
        LinkVisited => "linkVisited",
        Code => "code",
        Heading => "heading",
    }
}

slots! {
    /// Backgrounds and surfaces.
    BackgroundSlot {
        Base => "base",
        Elevated => "elevated",
        ElevatedHigher => "elevatedHigher",
        Depressed => "depressed",
        Overlay => "overlay",
        Stripe => "stripe",
    }
}

slots! {
    /// Data visualization series and value polarity.
    DataSlot {
        Series1 => "series1",
        Series2 => "series2",
        Series3 => "series3",
        Series4 => "series4",
        Series5 => "series5",
        Positive => "positive",
        Negative => "negative",
        Neutral => "neutral",
    }
}

slots! {
    /// Signature decorative elements of the skin (sweeps, elbows, pills).
    DecorativeSlot {
        Sweep => "sweep",
        Elbow => "elbow",
        Pill => "pill",
        Bracket => "bracket",
        Terminal => "terminal",
        Hologram => "hologram",
        Alert => "alert",
        Caution => "caution",
    }
}

/// The category segment of a semantic path.
///
/// This covers the current schema only; the deprecated `interface` and
/// `system` categories are carried as data on [`SemanticColors`] but have
/// no addressable paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticCategory {
    Frame,
    Action,
    Navigation,
    Status,
    Content,
    Background,
    Data,
    Decorative,
}

impl SemanticCategory {
    /// Every category, in schema order.
    pub const ALL: &'static [SemanticCategory] = &[
        SemanticCategory::Frame,
        SemanticCategory::Action,
        SemanticCategory::Navigation,
        SemanticCategory::Status,
        SemanticCategory::Content,
        SemanticCategory::Background,
        SemanticCategory::Data,
        SemanticCategory::Decorative,
    ];

    /// Returns the category segment of the dotted path.
    pub const fn name(self) -> &'static str {
        match self {
            SemanticCategory::Frame => "frame",
            SemanticCategory::Action => "action",
            SemanticCategory::Navigation => "navigation",
            SemanticCategory::Status => "status",
            SemanticCategory::Content => "content",
            SemanticCategory::Background => "background",
            SemanticCategory::Data => "data",
            SemanticCategory::Decorative => "decorative",
        }
    }

    /// Looks a category up by its path segment.
    pub fn from_name(name: &str) -> Option<SemanticCategory> {
        SemanticCategory::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed semantic path: one (category, slot) pair.
///
/// This is the closed enumeration of every legal path. Anything that parses
/// is resolvable against every complete variant; anything that does not
/// parse is invalid everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticPath {
    Frame(FrameSlot),
    Action(ActionSlot),
    Navigation(NavigationSlot),
    Status(StatusSlot),
    Content(ContentSlot),
    Background(BackgroundSlot),
    Data(DataSlot),
    Decorative(DecorativeSlot),
}

impl SemanticPath {
    /// The designated fallback role for failed resolutions.
    ///
    /// A wrong-but-visible frame color is preferred over failing the
    /// caller; rendering must keep going.
    pub const FALLBACK: SemanticPath = SemanticPath::Frame(FrameSlot::Primary);

    /// Returns the category half of the pair.
    pub const fn category(self) -> SemanticCategory {
        match self {
            SemanticPath::Frame(_) => SemanticCategory::Frame,
            SemanticPath::Action(_) => SemanticCategory::Action,
            SemanticPath::Navigation(_) => SemanticCategory::Navigation,
            SemanticPath::Status(_) => SemanticCategory::Status,
            SemanticPath::Content(_) => SemanticCategory::Content,
            SemanticPath::Background(_) => SemanticCategory::Background,
            SemanticPath::Data(_) => SemanticCategory::Data,
            SemanticPath::Decorative(_) => SemanticCategory::Decorative,
        }
    }

    /// Returns the slot half of the pair, as its path segment.
    pub const fn slot_name(self) -> &'static str {
        match self {
            SemanticPath::Frame(s) => s.name(),
            SemanticPath::Action(s) => s.name(),
            SemanticPath::Navigation(s) => s.name(),
            SemanticPath::Status(s) => s.name(),
            SemanticPath::Content(s) => s.name(),
            SemanticPath::Background(s) => s.name(),
            SemanticPath::Data(s) => s.name(),
            SemanticPath::Decorative(s) => s.name(),
        }
    }

    /// Iterates every legal path, grouped by category in schema order.
    pub fn all() -> impl Iterator<Item = SemanticPath> {
        FrameSlot::ALL
            .iter()
            .map(|s| SemanticPath::Frame(*s))
            .chain(ActionSlot::ALL.iter().map(|s| SemanticPath::Action(*s)))
            .chain(
                NavigationSlot::ALL
                    .iter()
                    .map(|s| SemanticPath::Navigation(*s)),
            )
            .chain(StatusSlot::ALL.iter().map(|s| SemanticPath::Status(*s)))
            .chain(ContentSlot::ALL.iter().map(|s| SemanticPath::Content(*s)))
            .chain(
                BackgroundSlot::ALL
                    .iter()
                    .map(|s| SemanticPath::Background(*s)),
            )
            .chain(DataSlot::ALL.iter().map(|s| SemanticPath::Data(*s)))
            .chain(
                DecorativeSlot::ALL
                    .iter()
                    .map(|s| SemanticPath::Decorative(*s)),
            )
    }
}

impl fmt::Display for SemanticPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category().name(), self.slot_name())
    }
}

impl FromStr for SemanticPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, PathError> {
        let mut parts = s.split('.');
        let (Some(category), Some(slot), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(PathError::InvalidShape {
                path: s.to_string(),
            });
        };
        if category.is_empty() || slot.is_empty() {
            return Err(PathError::InvalidShape {
                path: s.to_string(),
            });
        }

        let cat = SemanticCategory::from_name(category).ok_or_else(|| {
            PathError::UnknownCategory {
                category: category.to_string(),
            }
        })?;

        let path = match cat {
            SemanticCategory::Frame => FrameSlot::from_name(slot).map(SemanticPath::Frame),
            SemanticCategory::Action => ActionSlot::from_name(slot).map(SemanticPath::Action),
            SemanticCategory::Navigation => {
                NavigationSlot::from_name(slot).map(SemanticPath::Navigation)
            }
            SemanticCategory::Status => StatusSlot::from_name(slot).map(SemanticPath::Status),
            SemanticCategory::Content => ContentSlot::from_name(slot).map(SemanticPath::Content),
            SemanticCategory::Background => {
                BackgroundSlot::from_name(slot).map(SemanticPath::Background)
            }
            SemanticCategory::Data => DataSlot::from_name(slot).map(SemanticPath::Data),
            SemanticCategory::Decorative => {
                DecorativeSlot::from_name(slot).map(SemanticPath::Decorative)
            }
        };

        path.ok_or_else(|| PathError::UnknownSlot {
            category: category.to_string(),
            slot: slot.to_string(),
        })
    }
}

/// Frame and structure colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub divider: Color,
    pub corner: Color,
    pub sidebar: Color,
    pub topbar: Color,
}

impl FrameColors {
    pub fn get(&self, slot: FrameSlot) -> &Color {
        match slot {
            FrameSlot::Primary => &self.primary,
            FrameSlot::Secondary => &self.secondary,
            FrameSlot::Accent => &self.accent,
            FrameSlot::Divider => &self.divider,
            FrameSlot::Corner => &self.corner,
            FrameSlot::Sidebar => &self.sidebar,
            FrameSlot::Topbar => &self.topbar,
        }
    }
}

/// Interactive element colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionColors {
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub secondary: Color,
    pub secondary_hover: Color,
    pub secondary_active: Color,
    pub disabled: Color,
    pub focus: Color,
}

impl ActionColors {
    pub fn get(&self, slot: ActionSlot) -> &Color {
        match slot {
            ActionSlot::Primary => &self.primary,
            ActionSlot::PrimaryHover => &self.primary_hover,
            ActionSlot::PrimaryActive => &self.primary_active,
            ActionSlot::Secondary => &self.secondary,
            ActionSlot::SecondaryHover => &self.secondary_hover,
            ActionSlot::SecondaryActive => &self.secondary_active,
            ActionSlot::Disabled => &self.disabled,
            ActionSlot::Focus => &self.focus,
        }
    }
}

/// Navigation and menu colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationColors {
    pub item: Color,
    pub item_hover: Color,
    pub item_active: Color,
    pub item_disabled: Color,
    pub indicator: Color,
    pub breadcrumb: Color,
}

impl NavigationColors {
    pub fn get(&self, slot: NavigationSlot) -> &Color {
        match slot {
            NavigationSlot::Item => &self.item,
            NavigationSlot::ItemHover => &self.item_hover,
            NavigationSlot::ItemActive => &self.item_active,
            NavigationSlot::ItemDisabled => &self.item_disabled,
            NavigationSlot::Indicator => &self.indicator,
            NavigationSlot::Breadcrumb => &self.breadcrumb,
        }
    }
}

/// Status and alert colors, with severity levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusColors {
    pub info: Color,
    pub info_light: Color,
    pub success: Color,
    pub success_light: Color,
    pub warning: Color,
    pub warning_light: Color,
    pub warning_critical: Color,
    pub error: Color,
    pub error_light: Color,
    pub error_critical: Color,
    pub neutral: Color,
}

impl StatusColors {
    pub fn get(&self, slot: StatusSlot) -> &Color {
        match slot {
            StatusSlot::Info => &self.info,
            StatusSlot::InfoLight => &self.info_light,
            StatusSlot::Success => &self.success,
            StatusSlot::SuccessLight => &self.success_light,
            StatusSlot::Warning => &self.warning,
            StatusSlot::WarningLight => &self.warning_light,
            StatusSlot::WarningCritical => &self.warning_critical,
            StatusSlot::Error => &self.error,
            StatusSlot::ErrorLight => &self.error_light,
            StatusSlot::ErrorCritical => &self.error_critical,
            StatusSlot::Neutral => &self.neutral,
        }
    }
}

/// Content and typography colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentColors {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub inverse: Color,
    pub link: Color,
    pub link_hover: Color,
    pub link_visited: Color,
    pub code: Color,
    pub heading: Color,
}

impl ContentColors {
    pub fn get(&self, slot: ContentSlot) -> &Color {
        match slot {
            ContentSlot::Primary => &self.primary,
            ContentSlot::Secondary => &self.secondary,
            ContentSlot::Tertiary => &self.tertiary,
            ContentSlot::Inverse => &self.inverse,
            ContentSlot::Link => &self.link,
            ContentSlot::LinkHover => &self.link_hover,
            ContentSlot::LinkVisited => &self.link_visited,
            ContentSlot::Code => &self.code,
            ContentSlot::Heading => &self.heading,
        }
    }
}

/// Background and surface colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundColors {
    pub base: Color,
    pub elevated: Color,
    pub elevated_higher: Color,
    pub depressed: Color,
    pub overlay: Color,
    pub stripe: Color,
}

impl BackgroundColors {
    pub fn get(&self, slot: BackgroundSlot) -> &Color {
        match slot {
            BackgroundSlot::Base => &self.base,
            BackgroundSlot::Elevated => &self.elevated,
            BackgroundSlot::ElevatedHigher => &self.elevated_higher,
            BackgroundSlot::Depressed => &self.depressed,
            BackgroundSlot::Overlay => &self.overlay,
            BackgroundSlot::Stripe => &self.stripe,
        }
    }
}

/// Data visualization colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataColors {
    pub series1: Color,
    pub series2: Color,
    pub series3: Color,
    pub series4: Color,
    pub series5: Color,
    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,
}

impl DataColors {
    pub fn get(&self, slot: DataSlot) -> &Color {
        match slot {
            DataSlot::Series1 => &self.series1,
            DataSlot::Series2 => &self.series2,
            DataSlot::Series3 => &self.series3,
            DataSlot::Series4 => &self.series4,
            DataSlot::Series5 => &self.series5,
            DataSlot::Positive => &self.positive,
            DataSlot::Negative => &self.negative,
            DataSlot::Neutral => &self.neutral,
        }
    }
}

/// Decorative skin element colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorativeColors {
    pub sweep: Color,
    pub elbow: Color,
    pub pill: Color,
    pub bracket: Color,
    pub terminal: Color,
    pub hologram: Color,
    pub alert: Color,
    pub caution: Color,
}

impl DecorativeColors {
    pub fn get(&self, slot: DecorativeSlot) -> &Color {
        match slot {
            DecorativeSlot::Sweep => &self.sweep,
            DecorativeSlot::Elbow => &self.elbow,
            DecorativeSlot::Pill => &self.pill,
            DecorativeSlot::Bracket => &self.bracket,
            DecorativeSlot::Terminal => &self.terminal,
            DecorativeSlot::Hologram => &self.hologram,
            DecorativeSlot::Alert => &self.alert,
            DecorativeSlot::Caution => &self.caution,
        }
    }
}

/// Deprecated interface-state colors, kept for compatibility with older
/// call sites. Not addressable through semantic paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceColors {
    pub active: Color,
    pub inactive: Color,
    pub hover: Color,
    pub pressed: Color,
}

/// Deprecated system-status colors, kept for compatibility with older
/// call sites. Not addressable through semantic paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemColors {
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

/// A complete semantic mapping: one color per slot, for every slot.
///
/// Built-in variants are `static` instances of this type, so totality is
/// guaranteed by construction; there is no slot a complete mapping can
/// fail to answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColors {
    pub frame: FrameColors,
    pub action: ActionColors,
    pub navigation: NavigationColors,
    pub status: StatusColors,
    pub content: ContentColors,
    pub background: BackgroundColors,
    pub data: DataColors,
    pub decorative: DecorativeColors,
    /// Deprecated category; optional and path-unaddressable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<InterfaceColors>,
    /// Deprecated category; optional and path-unaddressable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemColors>,
}

impl SemanticColors {
    /// Returns the color bound to `path`. Total: every path answers.
    pub fn get(&self, path: SemanticPath) -> &Color {
        match path {
            SemanticPath::Frame(s) => self.frame.get(s),
            SemanticPath::Action(s) => self.action.get(s),
            SemanticPath::Navigation(s) => self.navigation.get(s),
            SemanticPath::Status(s) => self.status.get(s),
            SemanticPath::Content(s) => self.content.get(s),
            SemanticPath::Background(s) => self.background.get(s),
            SemanticPath::Data(s) => self.data.get(s),
            SemanticPath::Decorative(s) => self.decorative.get(s),
        }
    }
}

/// Declares the partial (all-`Option`) mirror of a category struct, used
/// by caller-supplied custom mappings.
macro_rules! partial_category {
    ($(#[$meta:meta])* $name:ident / $slot:ident { $($field:ident => $variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<Color>,
            )+
        }

        impl $name {
            pub fn get(&self, slot: $slot) -> Option<&Color> {
                match slot {
                    $($slot::$variant => self.$field.as_ref()),+
                }
            }
        }
    };
}

partial_category! {
    /// Partial frame colors for a custom mapping.
    CustomFrameColors / FrameSlot {
        primary => Primary,
        secondary => Secondary,
        accent => Accent,
        divider => Divider,
        corner => Corner,
        sidebar => Sidebar,
        topbar => Topbar,
    }
}

partial_category! {
    /// Partial action colors for a custom mapping.
    CustomActionColors / ActionSlot {
        primary => Primary,
        primary_hover => PrimaryHover,
        primary_active => PrimaryActive,
        secondary => Secondary,
        secondary_hover => SecondaryHover,
        secondary_active => SecondaryActive,
        disabled => Disabled,
        focus => Focus,
    }
}

partial_category! {
    /// Partial navigation colors for a custom mapping.
    CustomNavigationColors / NavigationSlot {
        item => Item,
        item_hover => ItemHover,
        item_active => ItemActive,
        item_disabled => ItemDisabled,
        indicator => Indicator,
        breadcrumb => Breadcrumb,
    }
}

partial_category! {
    /// Partial status colors for a custom mapping.
    CustomStatusColors / StatusSlot {
        info => Info,
        info_light => InfoLight,
        success => Success,
        success_light => SuccessLight,
        warning => Warning,
        warning_light => WarningLight,
        warning_critical => WarningCritical,
        error => Error,
        error_light => ErrorLight,
        error_critical => ErrorCritical,
        neutral => Neutral,
    }
}

partial_category! {
    /// Partial content colors for a custom mapping.
    CustomContentColors / ContentSlot {
        primary => Primary,
        secondary => Secondary,
        tertiary => Tertiary,
        inverse => Inverse,
        link => Link,
        link_hover => LinkHover,
        link_visited => LinkVisited,
        code => Code,
        heading => Heading,
    }
}

partial_category! {
    /// Partial background colors for a custom mapping.
    CustomBackgroundColors / BackgroundSlot {
        base => Base,
        elevated => Elevated,
        elevated_higher => ElevatedHigher,
        depressed => Depressed,
        overlay => Overlay,
        stripe => Stripe,
    }
}

partial_category! {
    /// Partial data visualization colors for a custom mapping.
    CustomDataColors / DataSlot {
        series1 => Series1,
        series2 => Series2,
        series3 => Series3,
        series4 => Series4,
        series5 => Series5,
        positive => Positive,
        negative => Negative,
        neutral => Neutral,
    }
}

partial_category! {
    /// Partial decorative colors for a custom mapping.
    CustomDecorativeColors / DecorativeSlot {
        sweep => Sweep,
        elbow => Elbow,
        pill => Pill,
        bracket => Bracket,
        terminal => Terminal,
        hologram => Hologram,
        alert => Alert,
        caution => Caution,
    }
}

/// A caller-supplied partial semantic mapping for the `custom` variant.
///
/// No totality check is performed at construction; a slot the mapping does
/// not bind surfaces later as a resolution failure, which degrades to the
/// fallback color. Deserializes from YAML in the same nested shape the
/// schema uses:
///
/// ```yaml
/// frame:
///   primary: "#FF6600"
/// status:
///   success: "#00CC66"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomColors {
    pub frame: CustomFrameColors,
    pub action: CustomActionColors,
    pub navigation: CustomNavigationColors,
    pub status: CustomStatusColors,
    pub content: CustomContentColors,
    pub background: CustomBackgroundColors,
    pub data: CustomDataColors,
    pub decorative: CustomDecorativeColors,
}

impl CustomColors {
    /// Returns the color bound to `path`, if this mapping binds it.
    pub fn get(&self, path: SemanticPath) -> Option<&Color> {
        match path {
            SemanticPath::Frame(s) => self.frame.get(s),
            SemanticPath::Action(s) => self.action.get(s),
            SemanticPath::Navigation(s) => self.navigation.get(s),
            SemanticPath::Status(s) => self.status.get(s),
            SemanticPath::Content(s) => self.content.get(s),
            SemanticPath::Background(s) => self.background.get(s),
            SemanticPath::Data(s) => self.data.get(s),
            SemanticPath::Decorative(s) => self.decorative.get(s),
        }
    }

    /// Parses a custom mapping from YAML content.
    ///
    /// # Errors
    ///
    /// Returns a [`DefinitionError`] if parsing fails. Missing slots are
    /// not an error; they stay unbound.
    pub fn from_yaml(yaml: &str) -> Result<Self, DefinitionError> {
        serde_yaml::from_str(yaml).map_err(|e| DefinitionError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Loads a custom mapping from a YAML file.
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
