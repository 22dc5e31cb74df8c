//! The atomic color palette.
//!
//! Every themeable color in the engine bottoms out in one of these named
//! entries. The names are appearance-based (they describe what the color
//! looks like, not what it is for) and are kept for the compatibility
//! bridge in [`crate::migration`]; new code should go through semantic
//! paths instead.
//!
//! # Example
//!
//! ```rust
//! use viewscreen_theme::PaletteColor;
//!
//! assert_eq!(PaletteColor::Evening.hex(), "#2255FF");
//! assert_eq!(PaletteColor::from_name("paleBlue"), Some(PaletteColor::PaleBlue));
//! assert!(PaletteColor::from_name("chartreuse").is_none());
//! ```

use crate::color::Color;

/// A named entry in the atomic palette.
///
/// The string form of each name (see [`name`](PaletteColor::name)) is the
/// identifier older call sites pass around; multi-word names keep their
/// historical spelling (`paleBlue`, `african-violet`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Orange,
    Mango,
    Lilac,
    Purple,
    Brick,
    Naples,
    PaleBlue,
    SkyBlue,
    BigBlue,
    Gray,
    Evening,
    Midnight,
    Cool,
    Honey,
    Cardinal,
    Tangerine,
    Green,
    Galaxy,
    Ghost,
    Moonshine,
    Wheat,
    Roseblush,
    Mars,
    Martian,
    Ice,
    Gold,
    Peach,
    Butterscotch,
    Tomato,
    Violet,
    AfricanViolet,
    Almond,
    AlmondCreme,
    Bluey,
    Sky,
    Sunflower,
    Magenta,
    VioletCreme,
    SpaceWhite,
    Goldfinch,
    Camel,
    Candlelight,
    EveningShade,
    Dandelion,
    GoldPressedLatinum,
    Rust,
    Tamarillo,
    Twilight,
    Ocean,
    Pacific,
    Pumpkin,
    Sage,
    SandyDesert,
    TextBlock,
    Viol,
    Wisteria,
}

impl PaletteColor {
    /// Every palette entry, in definition order.
    pub const ALL: &'static [PaletteColor] = &[
        PaletteColor::Orange,
        PaletteColor::Mango,
        PaletteColor::Lilac,
        PaletteColor::Purple,
        PaletteColor::Brick,
        PaletteColor::Naples,
        PaletteColor::PaleBlue,
        PaletteColor::SkyBlue,
        PaletteColor::BigBlue,
        PaletteColor::Gray,
        PaletteColor::Evening,
        PaletteColor::Midnight,
        PaletteColor::Cool,
        PaletteColor::Honey,
        PaletteColor::Cardinal,
        PaletteColor::Tangerine,
        PaletteColor::Green,
        PaletteColor::Galaxy,
        PaletteColor::Ghost,
        PaletteColor::Moonshine,
        PaletteColor::Wheat,
        PaletteColor::Roseblush,
        PaletteColor::Mars,
        PaletteColor::Martian,
        PaletteColor::Ice,
        PaletteColor::Gold,
        PaletteColor::Peach,
        PaletteColor::Butterscotch,
        PaletteColor::Tomato,
        PaletteColor::Violet,
        PaletteColor::AfricanViolet,
        PaletteColor::Almond,
        PaletteColor::AlmondCreme,
        PaletteColor::Bluey,
        PaletteColor::Sky,
        PaletteColor::Sunflower,
        PaletteColor::Magenta,
        PaletteColor::VioletCreme,
        PaletteColor::SpaceWhite,
        PaletteColor::Goldfinch,
        PaletteColor::Camel,
        PaletteColor::Candlelight,
        PaletteColor::EveningShade,
        PaletteColor::Dandelion,
        PaletteColor::GoldPressedLatinum,
        PaletteColor::Rust,
        PaletteColor::Tamarillo,
        PaletteColor::Twilight,
        PaletteColor::Ocean,
        PaletteColor::Pacific,
        PaletteColor::Pumpkin,
        PaletteColor::Sage,
        PaletteColor::SandyDesert,
        PaletteColor::TextBlock,
        PaletteColor::Viol,
        PaletteColor::Wisteria,
    ];

    /// Returns the hex encoding bound to this entry.
    pub const fn hex(self) -> &'static str {
        match self {
            PaletteColor::Orange => "#FF9900",
            PaletteColor::Mango => "#FF9966",
            PaletteColor::Lilac => "#CC99CC",
            PaletteColor::Purple => "#CC6699",
            PaletteColor::Brick => "#CC6666",
            PaletteColor::Naples => "#FFCC99",
            PaletteColor::PaleBlue => "#9999CC",
            PaletteColor::SkyBlue => "#9999FF",
            PaletteColor::BigBlue => "#6666FF",
            PaletteColor::Gray => "#999999",
            PaletteColor::Evening => "#2255FF",
            PaletteColor::Midnight => "#1111EE",
            PaletteColor::Cool => "#5588FF",
            PaletteColor::Honey => "#FFCC99",
            PaletteColor::Cardinal => "#CC2233",
            PaletteColor::Tangerine => "#FF8833",
            PaletteColor::Green => "#33CC99",
            PaletteColor::Galaxy => "#444A77",
            PaletteColor::Ghost => "#88BBFF",
            PaletteColor::Moonshine => "#DDEEFF",
            PaletteColor::Wheat => "#CCAA88",
            PaletteColor::Roseblush => "#CC6666",
            PaletteColor::Mars => "#FF2200",
            PaletteColor::Martian => "#FFAA00",
            PaletteColor::Ice => "#BBCCFF",
            PaletteColor::Gold => "#FFBB00",
            PaletteColor::Peach => "#FFBB99",
            PaletteColor::Butterscotch => "#FFAA77",
            PaletteColor::Tomato => "#FF5555",
            PaletteColor::Violet => "#9944FF",
            PaletteColor::AfricanViolet => "#CC99FF",
            PaletteColor::Almond => "#FF9966",
            PaletteColor::AlmondCreme => "#FFDDBB",
            PaletteColor::Bluey => "#33BBFF",
            PaletteColor::Sky => "#AACCFF",
            PaletteColor::Sunflower => "#FFCC00",
            PaletteColor::Magenta => "#CC4499",
            PaletteColor::VioletCreme => "#FF99CC",
            PaletteColor::SpaceWhite => "#FFEEDD",
            PaletteColor::Goldfinch => "#FFBB00",
            PaletteColor::Camel => "#CC9966",
            PaletteColor::Candlelight => "#FFEEAA",
            PaletteColor::EveningShade => "#1155CC",
            PaletteColor::Dandelion => "#FFDD00",
            PaletteColor::GoldPressedLatinum => "#FFFF99",
            PaletteColor::Rust => "#BB4411",
            PaletteColor::Tamarillo => "#CC4444",
            PaletteColor::Twilight => "#2244AA",
            PaletteColor::Ocean => "#0055BB",
            PaletteColor::Pacific => "#0088FF",
            PaletteColor::Pumpkin => "#FF8800",
            PaletteColor::Sage => "#7788CC",
            PaletteColor::SandyDesert => "#EEAA66",
            PaletteColor::TextBlock => "#889977",
            PaletteColor::Viol => "#9977AA",
            PaletteColor::Wisteria => "#9999FF",
        }
    }

    /// Returns the public identifier of this entry.
    pub const fn name(self) -> &'static str {
        match self {
            PaletteColor::Orange => "orange",
            PaletteColor::Mango => "mango",
            PaletteColor::Lilac => "lilac",
            PaletteColor::Purple => "purple",
            PaletteColor::Brick => "brick",
            PaletteColor::Naples => "naples",
            PaletteColor::PaleBlue => "paleBlue",
            PaletteColor::SkyBlue => "skyBlue",
            PaletteColor::BigBlue => "bigBlue",
            PaletteColor::Gray => "gray",
            PaletteColor::Evening => "evening",
            PaletteColor::Midnight => "midnight",
            PaletteColor::Cool => "cool",
            PaletteColor::Honey => "honey",
            PaletteColor::Cardinal => "cardinal",
            PaletteColor::Tangerine => "tangerine",
            PaletteColor::Green => "green",
            PaletteColor::Galaxy => "galaxy",
            PaletteColor::Ghost => "ghost",
            PaletteColor::Moonshine => "moonshine",
            PaletteColor::Wheat => "wheat",
            PaletteColor::Roseblush => "roseblush",
            PaletteColor::Mars => "mars",
            PaletteColor::Martian => "martian",
            PaletteColor::Ice => "ice",
            PaletteColor::Gold => "gold",
            PaletteColor::Peach => "peach",
            PaletteColor::Butterscotch => "butterscotch",
            PaletteColor::Tomato => "tomato",
            PaletteColor::Violet => "violet",
            PaletteColor::AfricanViolet => "african-violet",
            PaletteColor::Almond => "almond",
            PaletteColor::AlmondCreme => "almond-creme",
            PaletteColor::Bluey => "bluey",
            PaletteColor::Sky => "sky",
            PaletteColor::Sunflower => "sunflower",
            PaletteColor::Magenta => "magenta",
            PaletteColor::VioletCreme => "violet-creme",
            PaletteColor::SpaceWhite => "space-white",
            PaletteColor::Goldfinch => "goldfinch",
            PaletteColor::Camel => "camel",
            PaletteColor::Candlelight => "candlelight",
            PaletteColor::EveningShade => "evening-shade",
            PaletteColor::Dandelion => "dandelion",
            PaletteColor::GoldPressedLatinum => "gold-pressed-latinum",
            PaletteColor::Rust => "rust",
            PaletteColor::Tamarillo => "tamarillo",
            PaletteColor::Twilight => "twilight",
            PaletteColor::Ocean => "ocean",
            PaletteColor::Pacific => "pacific",
            PaletteColor::Pumpkin => "pumpkin",
            PaletteColor::Sage => "sage",
            PaletteColor::SandyDesert => "sandy-desert",
            PaletteColor::TextBlock => "text-block",
            PaletteColor::Viol => "viol",
            PaletteColor::Wisteria => "wisteria",
        }
    }

    /// Returns this entry's value as a [`Color`].
    pub const fn color(self) -> Color {
        Color::from_static(self.hex())
    }

    /// Looks an entry up by its public identifier.
    pub fn from_name(name: &str) -> Option<PaletteColor> {
        PaletteColor::ALL.iter().copied().find(|c| c.name() == name)
    }
}
