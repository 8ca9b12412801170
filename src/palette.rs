//! Palette catalog: named, ordered sequences of registry colors.

use crate::catalog::Catalog;
use crate::{Error, Result, color};

/// General purpose palette
pub const PRIMARY: &[&str] = &[
    color::OXFORD_BLUE,
    color::CORAL,
    color::AQUA,
    color::YELLOW_OCHRE,
    color::PLUM,
    color::SAGE_GREEN,
    color::ORANGE,
    color::SKY_BLUE,
    color::PINK,
    color::VIRIDIAN,
];

/// Business and academic presentations
pub const PROFESSIONAL: &[&str] = &[
    color::OXFORD_BLUE,
    color::ASH_GREY,
    color::GREEN,
    color::SIENNA,
    color::ROYAL_BLUE,
    color::UMBER,
];

/// Eye-catching visualizations
pub const VIBRANT: &[&str] = &[
    color::CORAL,
    color::AQUA,
    color::ORANGE,
    color::PINK,
    color::VIVID_GREEN,
    color::CERULEAN_BLUE,
    color::LEMON_YELLOW,
];

/// Softer visualizations
pub const PASTEL: &[&str] = &[
    color::SKY_BLUE,
    color::PEACH,
    color::LILAC,
    color::SAGE_GREEN,
    color::POTTERS_PINK,
    color::LAVENDER,
    color::COOL_GREY,
];

/// Data with a meaningful center point
pub const DIVERGING: &[&str] = &[
    color::CORAL,
    color::PEACH,
    color::STONE_GREY,
    color::SKY_BLUE,
    color::OXFORD_BLUE,
];

/// Continuous data, light to dark
pub const SEQUENTIAL_BLUE: &[&str] = &[
    color::SKY_BLUE,
    color::CERULEAN_BLUE,
    color::ROYAL_BLUE,
    color::OXFORD_BLUE,
    color::CHARCOAL,
];

/// Primary Care Health Sciences
pub const HEALTH: &[&str] = &[
    color::OXFORD_PHC,
    color::PLUM,
    color::CORAL,
    color::AQUA,
    color::SAGE_GREEN,
];

/// Theme pack: heritage and stability
pub const TRADITIONAL: &[&str] = &[
    color::OXFORD_BLUE,
    color::RED,
    color::GREEN,
    color::GOLD,
    color::CHARCOAL,
    color::STONE_GREY,
];

/// Theme pack: modern and clean
pub const CONTEMPORARY: &[&str] = &[
    color::MAUVE,
    color::PEACH,
    color::DUSK,
    color::OCEAN_GREY,
    color::SIENNA,
    color::COOL_GREY,
];

/// Theme pack: festive and bright
pub const CELEBRATORY: &[&str] = &[
    color::PINK,
    color::ORANGE,
    color::CORAL,
    color::YELLOW_OCHRE,
    color::VIVID_GREEN,
    color::SKY_BLUE,
];

/// Theme pack: professional
pub const CORPORATE: &[&str] = &[
    color::OXFORD_BLUE,
    color::ROYAL_BLUE,
    color::CHARCOAL,
    color::ASH_GREY,
    color::STONE_GREY,
    color::OFF_WHITE,
];

/// Theme pack: forward-looking
pub const INNOVATIVE: &[&str] = &[
    color::AQUA,
    color::VIVID_GREEN,
    color::CERULEAN_BLUE,
    color::LIME_GREEN,
    color::VIRIDIAN,
    color::SKY_BLUE,
];

/// Thesis palette: blues, purples, greys and backgrounds
pub const PHC_THESIS: &[&str] = &[
    color::OXFORD_BLUE,
    color::OXFORD_PHC,
    color::NAVY_BLUE,
    color::DEEP_TEAL,
    color::SLATE_BLUE_1,
    color::SLATE_BLUE_2,
    color::BRIGHT_BLUE,
    color::PERIWINKLE,
    color::CORNFLOWER,
    color::POWDER_BLUE,
    color::THESIS_PURPLE_1,
    color::THESIS_PURPLE_2,
    color::IRIS,
    color::AMETHYST,
    color::WISTERIA,
    color::SOFT_PURPLE,
    color::LILAC,
    color::LAVENDER,
    color::HEATHER,
    color::PLUM,
    color::DUSTY_MAUVE,
    color::GREY_BLUE,
    color::ASH_GREY,
    color::PALE_GREY,
    color::GOLDEN_YELLOW,
    color::WHITE,
    color::BLACK,
];

static PALETTES: Catalog<&[&str]> = Catalog::new(&[
    ("celebratory", CELEBRATORY),
    ("contemporary", CONTEMPORARY),
    ("corporate", CORPORATE),
    ("diverging", DIVERGING),
    ("health", HEALTH),
    ("innovative", INNOVATIVE),
    ("pastel", PASTEL),
    ("phc_thesis", PHC_THESIS),
    ("primary", PRIMARY),
    ("professional", PROFESSIONAL),
    ("sequential_blue", SEQUENTIAL_BLUE),
    ("traditional", TRADITIONAL),
    ("vibrant", VIBRANT),
]);

/// Get the colors of palette `name` (case-insensitive).
///
/// With `count == None`, the whole palette is returned.
/// Otherwise exactly `count` colors are returned, cycling through the palette
/// from its start if it is shorter than `count`.
///
/// The returned vector is a copy: modifying it does not affect the catalog.
pub fn get_palette(name: &str, count: Option<usize>) -> Result<Vec<&'static str>> {
    let palette = *PALETTES.get(name).ok_or_else(|| Error::UnknownPalette {
        name: name.to_string(),
        valid: names(),
    })?;

    match count {
        None => Ok(palette.to_vec()),
        Some(0) => Err(Error::invalid_config("count must be a positive integer, got 0")),
        Some(count) => Ok(palette.iter().copied().cycle().take(count).collect()),
    }
}

/// Alias of [`get_palette`], kept for the naming used by the plotly flavor of the theme
pub fn get_color_palette(name: &str, count: Option<usize>) -> Result<Vec<&'static str>> {
    get_palette(name, count)
}

/// Sorted names of the catalog
pub fn names() -> Vec<&'static str> {
    PALETTES.names()
}
